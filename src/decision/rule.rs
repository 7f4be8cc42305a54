//! A single prioritized condition/action pair.

/// Predicate over the state a rule inspects.
pub type Condition<S> = Box<dyn Fn(&S) -> bool>;

/// Produces the decision when the rule fires.
pub type Action<S, A> = Box<dyn Fn(&S) -> A>;

/// Priority given to rules added without one.
pub const DEFAULT_PRIORITY: i32 = 1;

/// Named rule. Higher priority is consulted first.
pub struct Rule<S, A> {
    /// Human-readable name (for logs and listings).
    pub name: String,

    /// Ordering key, higher first.
    pub priority: i32,

    condition: Condition<S>,
    action: Action<S, A>,
}

impl<S, A> Rule<S, A> {
    /// Create a rule.
    pub fn new(
        name: impl Into<String>,
        condition: impl Fn(&S) -> bool + 'static,
        action: impl Fn(&S) -> A + 'static,
        priority: i32,
    ) -> Self {
        Self {
            name: name.into(),
            priority,
            condition: Box::new(condition),
            action: Box::new(action),
        }
    }

    /// True when the rule applies to `state`.
    pub fn matches(&self, state: &S) -> bool {
        (self.condition)(state)
    }

    /// Decision this rule produces for `state`.
    pub fn fire(&self, state: &S) -> A {
        (self.action)(state)
    }
}

impl<S, A> std::fmt::Debug for Rule<S, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("priority", &self.priority)
            .finish_non_exhaustive()
    }
}
