//! Template substitution — resolves `${token}` placeholders.
//!
//! Expansion is a single left-to-right pass over the template. Each
//! token is looked up first in the per-call bindings (literal values
//! such as the biome name), then in the registry. A registry resolver
//! draws its value from the RNG, and that value is itself expanded
//! before insertion, so vocabulary entries may nest other tokens.
//! The inserted text is never rescanned at the outer level.
//!
//! RULE: Resolution order is draw order. Expanding the same template
//! against the same RNG state always yields the same text.

use crate::{
    config::TokenPolicy,
    error::{GenError, GenResult},
    rng::UnitSource,
    sampler::{pick, pick_uniform, WeightEntry},
};
use std::borrow::Cow;
use std::collections::HashMap;

const TOKEN_OPEN: &str = "${";
const TOKEN_CLOSE: char = '}';

/// How a registered token produces its value.
#[derive(Debug, Clone, Copy)]
pub enum Resolver {
    /// Weighted pick from a fixed vocabulary.
    Weighted(&'static [WeightEntry<&'static str>]),
    /// Uniform pick from a fixed vocabulary.
    Uniform(&'static [&'static str]),
    /// Integer in `[min, max]` from one direct draw.
    Number { min: u32, max: u32 },
}

impl Resolver {
    /// Produce the raw (possibly still tokenized) value. One draw.
    pub fn resolve<R: UnitSource + ?Sized>(&self, rng: &mut R) -> Cow<'static, str> {
        match self {
            Self::Weighted(pool) => Cow::Borrowed(*pick(pool, rng)),
            Self::Uniform(items) => Cow::Borrowed(*pick_uniform(items, rng)),
            Self::Number { min, max } => Cow::Owned(rng.next_in_range(*min, *max).to_string()),
        }
    }

    /// Every literal this resolver can emit. Empty for numeric resolvers.
    pub fn vocabulary(&self) -> Vec<&'static str> {
        match self {
            Self::Weighted(pool) => pool.iter().map(|e| e.key).collect(),
            Self::Uniform(items) => items.to_vec(),
            Self::Number { .. } => Vec::new(),
        }
    }
}

/// Token name → resolver.
#[derive(Debug, Clone, Default)]
pub struct TokenRegistry {
    resolvers: HashMap<&'static str, Resolver>,
}

impl TokenRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or replace a resolver.
    pub fn register(&mut self, name: &'static str, resolver: Resolver) {
        if self.resolvers.insert(name, resolver).is_some() {
            log::debug!("token '{name}' re-registered");
        }
    }

    pub fn get(&self, name: &str) -> Option<&Resolver> {
        self.resolvers.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.resolvers.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }

    /// Registered names, sorted for stable output.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.resolvers.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Tokens referenced by `templates` (and, transitively, by every
    /// vocabulary entry in this registry) that are neither registered
    /// nor listed in `bound`. Sorted and deduplicated.
    pub fn missing_tokens<'t>(
        &self,
        templates: impl IntoIterator<Item = &'t str>,
        bound: &[&str],
    ) -> Vec<String> {
        let mut sources: Vec<&str> = templates.into_iter().collect();
        for resolver in self.resolvers.values() {
            for entry in resolver.vocabulary() {
                sources.push(entry);
            }
        }
        let mut missing: Vec<String> = sources
            .iter()
            .flat_map(|s| tokens_in(s))
            .filter(|t| !self.contains(t) && !bound.contains(t))
            .map(str::to_string)
            .collect();
        missing.sort_unstable();
        missing.dedup();
        missing
    }
}

/// Token names appearing in `template`, in order. Unterminated
/// placeholders are skipped.
pub fn tokens_in(template: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut rest = template;
    while let Some(start) = rest.find(TOKEN_OPEN) {
        let after = &rest[start + TOKEN_OPEN.len()..];
        match after.find(TOKEN_CLOSE) {
            Some(end) => {
                tokens.push(&after[..end]);
                rest = &after[end + 1..];
            }
            None => break,
        }
    }
    tokens
}

/// Expands templates against a registry plus per-call literal bindings.
pub struct TemplateEngine<'r> {
    registry: &'r TokenRegistry,
    bindings: Vec<(&'static str, String)>,
    policy: TokenPolicy,
    max_depth: usize,
}

impl<'r> TemplateEngine<'r> {
    /// `max_depth` below 1 is raised to 1 so top-level tokens always resolve.
    pub fn new(registry: &'r TokenRegistry, policy: TokenPolicy, max_depth: usize) -> Self {
        Self {
            registry,
            bindings: Vec::new(),
            policy,
            max_depth: max_depth.max(1),
        }
    }

    /// Bind a literal value. Bindings shadow registry resolvers, are
    /// inserted verbatim, and consume no draws.
    pub fn bind(&mut self, name: &'static str, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        match self.bindings.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.bindings.push((name, value)),
        }
        self
    }

    pub fn expand<R: UnitSource + ?Sized>(&self, template: &str, rng: &mut R) -> GenResult<String> {
        self.expand_at(template, rng, 0)
    }

    fn expand_at<R: UnitSource + ?Sized>(
        &self,
        template: &str,
        rng: &mut R,
        depth: usize,
    ) -> GenResult<String> {
        let mut out = String::with_capacity(template.len() + 16);
        let mut rest = template;
        while let Some(start) = rest.find(TOKEN_OPEN) {
            out.push_str(&rest[..start]);
            let after = &rest[start + TOKEN_OPEN.len()..];
            let end = after.find(TOKEN_CLOSE).ok_or_else(|| GenError::UnterminatedToken {
                template: template.to_string(),
            })?;
            let token = &after[..end];
            out.push_str(&self.resolve(token, rng, depth)?);
            rest = &after[end + 1..];
        }
        out.push_str(rest);
        Ok(out)
    }

    fn resolve<R: UnitSource + ?Sized>(
        &self,
        token: &str,
        rng: &mut R,
        depth: usize,
    ) -> GenResult<String> {
        if let Some((_, value)) = self.bindings.iter().find(|(n, _)| *n == token) {
            return Ok(value.clone());
        }

        let Some(resolver) = self.registry.get(token) else {
            return match self.policy {
                TokenPolicy::Strict => Err(GenError::UnresolvedToken {
                    token: token.to_string(),
                }),
                TokenPolicy::Passthrough => {
                    log::warn!("no resolver for '${{{token}}}', leaving it verbatim");
                    Ok(format!("{TOKEN_OPEN}{token}{TOKEN_CLOSE}"))
                }
            };
        };

        if depth >= self.max_depth {
            return Err(GenError::TemplateTooDeep {
                token: token.to_string(),
                limit: self.max_depth,
            });
        }
        let raw = resolver.resolve(rng);
        self.expand_at(&raw, rng, depth + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedDraws;
    use crate::sampler::w;

    const FRUIT: &[&str] = &["apple", "pear"];
    const BASKET: &[&str] = &["a basket of ${fruit}s"];
    const LOOP: &[&str] = &["again ${loop}"];
    const WEIGHTED_METAL: &[WeightEntry<&str>] = &[w("gold", 9.0), w("lead", 1.0)];

    fn registry() -> TokenRegistry {
        let mut reg = TokenRegistry::new();
        reg.register("fruit", Resolver::Uniform(FRUIT));
        reg.register("basket", Resolver::Uniform(BASKET));
        reg.register("loop", Resolver::Uniform(LOOP));
        reg.register("metal", Resolver::Weighted(WEIGHTED_METAL));
        reg.register("count", Resolver::Number { min: 2, max: 5 });
        reg
    }

    #[test]
    fn expands_left_to_right_in_draw_order() {
        let reg = registry();
        let engine = TemplateEngine::new(&reg, TokenPolicy::Strict, 8);
        let mut src = ScriptedDraws::new(vec![0.0, 0.9]);
        let text = engine.expand("${fruit} then ${fruit}", &mut src).unwrap();
        assert_eq!(text, "apple then pear");
    }

    #[test]
    fn nested_tokens_expand_recursively() {
        let reg = registry();
        let engine = TemplateEngine::new(&reg, TokenPolicy::Strict, 8);
        let mut src = ScriptedDraws::new(vec![0.0, 0.9]);
        let text = engine.expand("I found ${basket}!", &mut src).unwrap();
        assert_eq!(text, "I found a basket of pears!");
        assert_eq!(src.consumed(), 2);
    }

    #[test]
    fn numeric_tokens_draw_directly() {
        let reg = registry();
        let engine = TemplateEngine::new(&reg, TokenPolicy::Strict, 8);
        let mut src = ScriptedDraws::new(vec![0.99, 0.95]);
        let text = engine.expand("${count} bars of ${metal}", &mut src).unwrap();
        assert_eq!(text, "5 bars of lead");
    }

    #[test]
    fn strict_policy_rejects_unknown_tokens() {
        let reg = registry();
        let engine = TemplateEngine::new(&reg, TokenPolicy::Strict, 8);
        let mut src = ScriptedDraws::constant(0.5);
        let err = engine.expand("a ${dragon}", &mut src).unwrap_err();
        assert!(matches!(err, GenError::UnresolvedToken { ref token } if token == "dragon"));
    }

    #[test]
    fn passthrough_policy_leaves_unknown_tokens_verbatim() {
        let reg = registry();
        let engine = TemplateEngine::new(&reg, TokenPolicy::Passthrough, 8);
        let mut src = ScriptedDraws::constant(0.0);
        let text = engine.expand("a ${dragon} and ${fruit}", &mut src).unwrap();
        assert_eq!(text, "a ${dragon} and apple");
    }

    #[test]
    fn unterminated_token_is_an_error() {
        let reg = registry();
        let engine = TemplateEngine::new(&reg, TokenPolicy::Passthrough, 8);
        let mut src = ScriptedDraws::constant(0.0);
        let err = engine.expand("broken ${fruit", &mut src).unwrap_err();
        assert!(matches!(err, GenError::UnterminatedToken { .. }));
    }

    #[test]
    fn self_referential_vocabulary_hits_depth_limit() {
        let reg = registry();
        let engine = TemplateEngine::new(&reg, TokenPolicy::Strict, 4);
        let mut src = ScriptedDraws::constant(0.0);
        let err = engine.expand("${loop}", &mut src).unwrap_err();
        assert!(matches!(err, GenError::TemplateTooDeep { limit: 4, .. }));
    }

    #[test]
    fn zero_depth_still_resolves_top_level_tokens() {
        let reg = registry();
        let engine = TemplateEngine::new(&reg, TokenPolicy::Strict, 0);
        let mut src = ScriptedDraws::constant(0.0);
        assert_eq!(engine.expand("${fruit}", &mut src).unwrap(), "apple");
    }

    #[test]
    fn bindings_shadow_registry_and_consume_no_draws() {
        let reg = registry();
        let mut engine = TemplateEngine::new(&reg, TokenPolicy::Strict, 8);
        engine.bind("fruit", "durian").bind("party_size", "4");
        let mut src = ScriptedDraws::constant(0.0);
        let text = engine.expand("${party_size} pets eat ${fruit}", &mut src).unwrap();
        assert_eq!(text, "4 pets eat durian");
        assert_eq!(src.consumed(), 0);
    }

    #[test]
    fn bound_values_are_not_rescanned() {
        let reg = registry();
        let mut engine = TemplateEngine::new(&reg, TokenPolicy::Strict, 8);
        engine.bind("name", "${fruit}");
        let mut src = ScriptedDraws::constant(0.0);
        assert_eq!(engine.expand("${name}", &mut src).unwrap(), "${fruit}");
    }

    #[test]
    fn tokens_in_lists_names_in_order() {
        assert_eq!(tokens_in("${a} and ${b_c} and ${a}"), vec!["a", "b_c", "a"]);
        assert!(tokens_in("no tokens here").is_empty());
        assert!(tokens_in("dangling ${x").is_empty());
    }

    #[test]
    fn missing_tokens_walks_vocabulary_too() {
        let mut reg = registry();
        const BAD: &[&str] = &["a ${ghost}"];
        reg.register("haunt", Resolver::Uniform(BAD));
        let missing = reg.missing_tokens(["${fruit} ${biome_name} ${nope}"], &["biome_name"]);
        assert_eq!(missing, vec!["ghost".to_string(), "nope".to_string()]);
    }
}
