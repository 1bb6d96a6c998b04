pub mod advise;
pub mod configure;
pub mod interactive;
pub mod recommend;
pub mod seasons;

use crate::config::Config;
use crate::core::resolver::AdviceResolver;

/// Build a resolver from a `--limit` override, falling back to the configured limit
pub fn resolver_for(config: &Config, limit: Option<u64>) -> AdviceResolver {
    let limit = limit
        .map(|l| usize::try_from(l).unwrap_or(usize::MAX))
        .unwrap_or(config.general.recommendation_limit);
    AdviceResolver::new(limit)
}
