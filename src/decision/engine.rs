//! Prioritized rule engine.
//!
//! Rules are kept sorted by descending priority. The sort is stable, so
//! rules of equal priority are consulted in insertion order. `decide`
//! returns the action of the first rule whose condition holds, or the
//! fallback when none does.

use log::{debug, trace};

use crate::core::GameRng;

use super::rule::{Rule, DEFAULT_PRIORITY};

/// Fallback decision when no rule matches.
pub type Fallback<S, A> = Box<dyn Fn(&S, &mut GameRng) -> A>;

/// Ordered rule list plus a fallback.
pub struct RuleEngine<S, A> {
    rules: Vec<Rule<S, A>>,
    fallback: Fallback<S, A>,
}

impl<S, A> RuleEngine<S, A> {
    /// Create an engine with no rules.
    pub fn new(fallback: impl Fn(&S, &mut GameRng) -> A + 'static) -> Self {
        Self {
            rules: Vec::new(),
            fallback: Box::new(fallback),
        }
    }

    /// Register a rule and restore priority order.
    pub fn add_rule(
        &mut self,
        name: impl Into<String>,
        condition: impl Fn(&S) -> bool + 'static,
        action: impl Fn(&S) -> A + 'static,
        priority: i32,
    ) {
        self.rules.push(Rule::new(name, condition, action, priority));
        self.rules.sort_by(|a, b| b.priority.cmp(&a.priority));
    }

    /// Register a rule at the default priority.
    pub fn add_default_rule(
        &mut self,
        name: impl Into<String>,
        condition: impl Fn(&S) -> bool + 'static,
        action: impl Fn(&S) -> A + 'static,
    ) {
        self.add_rule(name, condition, action, DEFAULT_PRIORITY);
    }

    /// Rule names and priorities in consultation order.
    pub fn rules(&self) -> impl Iterator<Item = (&str, i32)> {
        self.rules.iter().map(|r| (r.name.as_str(), r.priority))
    }

    /// Number of registered rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Action of the first matching rule, else the fallback.
    pub fn decide(&self, state: &S, rng: &mut GameRng) -> A {
        for rule in &self.rules {
            if rule.matches(state) {
                debug!("rule '{}' (priority {}) fired", rule.name, rule.priority);
                return rule.fire(state);
            }
            trace!("rule '{}' skipped", rule.name);
        }
        debug!("no rule matched, using fallback");
        (self.fallback)(state, rng)
    }
}

impl<S, A> std::fmt::Debug for RuleEngine<S, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rules)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> RuleEngine<i32, String> {
        RuleEngine::new(|n: &i32, _rng: &mut GameRng| format!("fallback {}", n))
    }

    #[test]
    fn test_highest_priority_wins() {
        let mut engine = engine();
        engine.add_rule("low", |_| true, |_| "low".to_string(), 1);
        engine.add_rule("high", |_| true, |_| "high".to_string(), 10);
        engine.add_rule("mid", |_| true, |_| "mid".to_string(), 5);

        let order: Vec<_> = engine.rules().collect();
        assert_eq!(order, vec![("high", 10), ("mid", 5), ("low", 1)]);
        assert_eq!(engine.decide(&0, &mut GameRng::new(0)), "high");
    }

    #[test]
    fn test_equal_priority_keeps_insertion_order() {
        let mut engine = engine();
        engine.add_default_rule("first", |_| true, |_| "first".to_string());
        engine.add_rule("top", |n| *n > 100, |_| "top".to_string(), 9);
        engine.add_default_rule("second", |_| true, |_| "second".to_string());

        let names: Vec<_> = engine.rules().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["top", "first", "second"]);
        assert_eq!(engine.decide(&1, &mut GameRng::new(0)), "first");
        assert_eq!(engine.decide(&101, &mut GameRng::new(0)), "top");
    }

    #[test]
    fn test_fallback_when_nothing_matches() {
        let mut engine = engine();
        assert!(engine.is_empty());
        assert_eq!(engine.decide(&7, &mut GameRng::new(0)), "fallback 7");

        engine.add_rule("even", |n| n % 2 == 0, |_| "even".to_string(), 2);
        assert_eq!(engine.len(), 1);
        assert_eq!(engine.decide(&3, &mut GameRng::new(0)), "fallback 3");
        assert_eq!(engine.decide(&4, &mut GameRng::new(0)), "even");
    }

    #[test]
    fn test_fallback_draws_from_rng() {
        let engine: RuleEngine<Vec<u8>, Option<u8>> =
            RuleEngine::new(|items: &Vec<u8>, rng: &mut GameRng| {
                rng.choose(items.as_slice()).copied()
            });
        let items = vec![1, 2, 3];
        let a = engine.decide(&items, &mut GameRng::new(11));
        let b = engine.decide(&items, &mut GameRng::new(11));
        assert_eq!(a, b);
        assert!(a.is_some());
        assert_eq!(engine.decide(&Vec::new(), &mut GameRng::new(11)), None);
    }
}
