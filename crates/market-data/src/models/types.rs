use std::borrow::Cow;

/// Market suffix appended to derived provider symbols (e.g. ".ST")
pub type MarketSuffix = Cow<'static, str>;
