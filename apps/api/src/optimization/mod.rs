// Engagement optimization: draft factor analysis, hashtag and tone tuning,
// posting-time lookup, and A/B variant comparison.

pub mod ab_testing;
pub mod factors;
pub mod handlers;
pub mod hashtags;
pub mod timing;
pub mod tone;
