use mandi_core::PriceQuote;

pub fn by_symbol(s: &str) -> Option<PriceQuote> {
    match s {
        "GC=F" => Some(PriceQuote::new(2_051.40, 2_043.10)),
        "SI=F" => Some(PriceQuote::new(23.18, 23.42)),
        "CL=F" => Some(PriceQuote::new(72.65, 71.90)),
        "INR=X" => Some(PriceQuote::new(83.12, 83.05)),
        _ => None,
    }
}
