// HTTP middleware layered in front of the recommendation core.

pub mod rate_limit;
pub mod security;
