//! Simulated game state: handles, the geode counter, and its scoped
//! mutation guard.
//!
//! The counter is owned by the host game; the predictor only reads it and
//! temporarily overwrites it through [`CountScope`]. Passing the context
//! explicitly (rather than reading ambient global state) keeps probing
//! testable: fixtures implement [`GameContext`] without touching any
//! process-wide state.

/// Number of geodes the player has opened so far.
///
/// A monotonically advancing counter in real play; the predictor rewinds
/// and fast-forwards it only inside a [`CountScope`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeodeCount(pub u32);

impl GeodeCount {
    pub const ZERO: Self = Self(0);

    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Step `distance` geodes back through history.
    ///
    /// There is no state before geode zero: when `distance` exceeds the
    /// count, the count itself is returned unchanged.
    pub fn rewind(self, distance: u32) -> Self {
        if distance > self.0 {
            self
        } else {
            Self(self.0 - distance)
        }
    }
}

impl std::ops::Add<u32> for GeodeCount {
    type Output = GeodeCount;

    fn add(self, rhs: u32) -> GeodeCount {
        GeodeCount(self.0 + rhs)
    }
}

/// Opaque handle identifying a kind of openable geode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct GeodeKind(pub u16);

/// Opaque handle identifying an item a geode can yield.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ItemHandle(pub u16);

/// The item (and how many of it) yielded by opening one geode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Treasure {
    pub item: ItemHandle,
    pub stack: u16,
}

impl Treasure {
    pub fn new(item: ItemHandle, stack: u16) -> Self {
        Self { item, stack }
    }
}

/// Mutable view of the game state the predictor manipulates.
///
/// The host game owns the real counter; tests provide in-memory fixtures.
pub trait GameContext {
    fn geode_count(&self) -> GeodeCount;

    fn set_geode_count(&mut self, count: GeodeCount);
}

/// Scoped override of the geode count.
///
/// Records the count at construction and writes it back when dropped, so
/// every exit path (normal return, `?`, unwind) restores the true game
/// state. Restoration goes through an infallible trait method: a failing
/// probe can never be masked by a failing restore.
pub struct CountScope<'a, C: GameContext + ?Sized> {
    ctx: &'a mut C,
    original: GeodeCount,
}

impl<'a, C: GameContext + ?Sized> CountScope<'a, C> {
    pub fn new(ctx: &'a mut C) -> Self {
        let original = ctx.geode_count();
        tracing::trace!(count = original.value(), "opening geode count scope");
        Self { ctx, original }
    }

    /// Count held before the scope opened.
    pub fn original(&self) -> GeodeCount {
        self.original
    }

    /// Point the simulation at `count` for subsequent oracle reads.
    pub fn probe(&mut self, count: GeodeCount) {
        self.ctx.set_geode_count(count);
    }

    /// Read-only view of the context, for oracle calls.
    pub fn ctx(&self) -> &C {
        self.ctx
    }
}

impl<C: GameContext + ?Sized> Drop for CountScope<'_, C> {
    fn drop(&mut self) {
        tracing::trace!(count = self.original.value(), "restoring geode count");
        self.ctx.set_geode_count(self.original);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestContext {
        count: GeodeCount,
    }

    impl GameContext for TestContext {
        fn geode_count(&self) -> GeodeCount {
            self.count
        }

        fn set_geode_count(&mut self, count: GeodeCount) {
            self.count = count;
        }
    }

    #[test]
    fn rewind_within_history() {
        assert_eq!(GeodeCount(10).rewind(4), GeodeCount(6));
        assert_eq!(GeodeCount(10).rewind(10), GeodeCount::ZERO);
    }

    #[test]
    fn rewind_past_start_clamps_to_current() {
        // Looking back past geode zero yields the current count, not zero.
        assert_eq!(GeodeCount(3).rewind(5), GeodeCount(3));
        assert_eq!(GeodeCount::ZERO.rewind(1), GeodeCount::ZERO);
    }

    #[test]
    fn scope_restores_on_drop() {
        let mut ctx = TestContext {
            count: GeodeCount(7),
        };

        {
            let mut scope = CountScope::new(&mut ctx);
            scope.probe(GeodeCount(42));
            assert_eq!(scope.ctx().geode_count(), GeodeCount(42));
        }

        assert_eq!(ctx.geode_count(), GeodeCount(7));
    }

    #[test]
    fn scope_restores_on_early_exit() {
        fn probe_then_fail(ctx: &mut TestContext) -> Result<(), ()> {
            let mut scope = CountScope::new(ctx);
            scope.probe(GeodeCount(99));
            Err(())?;
            Ok(())
        }

        let mut ctx = TestContext {
            count: GeodeCount(5),
        };
        assert!(probe_then_fail(&mut ctx).is_err());
        assert_eq!(ctx.geode_count(), GeodeCount(5));
    }

    #[test]
    fn scope_restores_after_multiple_probes() {
        let mut ctx = TestContext {
            count: GeodeCount(2),
        };

        {
            let mut scope = CountScope::new(&mut ctx);
            for raw in 10..20 {
                scope.probe(GeodeCount(raw));
            }
            assert_eq!(scope.original(), GeodeCount(2));
        }

        assert_eq!(ctx.geode_count(), GeodeCount(2));
    }
}
