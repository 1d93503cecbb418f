/// Generate a router async method that selects providers exposing a capability
/// and calls a single-provider method on each in turn via `fetch_single`.
///
/// Every argument must be `Copy` (symbols are passed as `&str`): the generated
/// closure is called once per connector.
#[macro_export]
macro_rules! mandi_router_method {
    (
        $(#[$meta:meta])*
        method: $name:ident( $target_ident:ident : $target_ty:ty $(, $arg_ident:ident : $arg_ty:ty )* ) -> $ret:ty,
        accessor: $accessor:ident,
        capability: $capability:expr,
        call: $call_name:ident( $call_first:ident $(, $call_rest:ident )* )
    ) => {
        $(#[$meta])*
        #[cfg_attr(
            feature = "tracing",
            tracing::instrument(
                target = "mandi::router",
                skip(self $(, $arg_ident)*),
            )
        )]
        ///
        /// # Errors
        /// Returns an error if no eligible provider succeeds or none support the capability.
        pub async fn $name(
            &self,
            $target_ident: $target_ty,
            $( $arg_ident: $arg_ty ),*
        ) -> Result<$ret, mandi_core::MandiError> {
            self.fetch_single(
                $target_ident,
                $capability,
                move |c| {
                    c.$accessor()?;
                    Some(async move {
                        match c.$accessor() {
                            Some(p) => p.$call_name($call_first $(, $call_rest )*).await,
                            None => Err(mandi_core::MandiError::connector(
                                c.name(),
                                format!("missing {} capability during call", $capability),
                            )),
                        }
                    })
                },
            )
            .await
        }
    };
}
