// Copyright 2025 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Script data model: steps, advance rules, guarded edges, validation.

use alloc::vec::Vec;
use core::fmt;

use smallvec::SmallVec;

/// Symbolic identifier of a step, assigned by the script author.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct StepId(pub u32);

/// How a step advances.
pub enum AdvanceRule<S> {
    /// Only a click on the step's resolved target advances it. External
    /// state changes are ignored.
    TargetClick,
    /// The step advances automatically, once, when the predicate over host
    /// application state holds. Guards must read host state only, never tour
    /// state.
    Guard(fn(&S) -> bool),
}

impl<S> Clone for AdvanceRule<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for AdvanceRule<S> {}

impl<S> fmt::Debug for AdvanceRule<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TargetClick => f.write_str("TargetClick"),
            Self::Guard(_) => f.write_str("Guard(..)"),
        }
    }
}

/// Where an advancing step goes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Continuation {
    /// Enter the named step.
    Goto(StepId),
    /// The script is complete.
    Finish,
}

/// The guarded edge out of a step.
pub enum NextStep<S> {
    /// Unconditional continuation.
    Always(Continuation),
    /// The script's branch point: `when` selects between two continuations
    /// at advance time. Evaluated against host state, like a guard.
    Branch {
        /// Predicate selecting the `then` arm.
        when: fn(&S) -> bool,
        /// Continuation when the predicate holds.
        then: Continuation,
        /// Continuation otherwise.
        otherwise: Continuation,
    },
}

impl<S> Clone for NextStep<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for NextStep<S> {}

impl<S> fmt::Debug for NextStep<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Always(cont) => f.debug_tuple("Always").field(cont).finish(),
            Self::Branch {
                then, otherwise, ..
            } => f
                .debug_struct("Branch")
                .field("then", then)
                .field("otherwise", otherwise)
                .finish_non_exhaustive(),
        }
    }
}

/// One instruction unit of the tour.
pub struct Step<K, S> {
    /// Unique symbolic name; also the current-step marker held by the driver.
    pub id: StepId,
    /// The element this step is about.
    pub target: K,
    /// Elements to highlight together with the target. Treated as a superset
    /// of the target: the driver always highlights `target` as well.
    pub highlights: SmallVec<[K; 4]>,
    /// Tooltip title.
    pub title: &'static str,
    /// Tooltip body copy.
    pub body: &'static str,
    /// How the step advances.
    pub advance: AdvanceRule<S>,
    /// Where it goes next.
    pub next: NextStep<S>,
}

impl<K: fmt::Debug, S> fmt::Debug for Step<K, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Step")
            .field("id", &self.id)
            .field("target", &self.target)
            .field("highlights", &self.highlights)
            .field("title", &self.title)
            .field("advance", &self.advance)
            .field("next", &self.next)
            .finish_non_exhaustive()
    }
}

/// Why a script failed validation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScriptError {
    /// A script must contain at least one step.
    Empty,
    /// Two steps share an id.
    DuplicateId(StepId),
    /// An edge names a step that does not exist.
    UnknownStep(StepId),
    /// An edge points at the current step or an earlier one. Tours are
    /// monotonic forward; there is no back transition.
    BackwardEdge {
        /// Step the edge leaves from.
        from: StepId,
        /// Step the edge points at.
        to: StepId,
    },
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("script has no steps"),
            Self::DuplicateId(id) => write!(f, "duplicate step id {id:?}"),
            Self::UnknownStep(id) => write!(f, "edge names unknown step {id:?}"),
            Self::BackwardEdge { from, to } => {
                write!(f, "backward edge from {from:?} to {to:?}")
            }
        }
    }
}

impl core::error::Error for ScriptError {}

/// A validated, ordered tour script.
///
/// Construction validates the transition graph: ids are unique, every edge
/// names an existing step, and every edge moves strictly forward in list
/// order. The driver can therefore never skip backwards or loop.
pub struct Script<K, S> {
    steps: Vec<Step<K, S>>,
}

impl<K: fmt::Debug, S> fmt::Debug for Script<K, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Script").field("steps", &self.steps).finish()
    }
}

impl<K, S> Script<K, S> {
    /// Validate and wrap a step list.
    pub fn new(steps: Vec<Step<K, S>>) -> Result<Self, ScriptError> {
        if steps.is_empty() {
            return Err(ScriptError::Empty);
        }
        for (i, step) in steps.iter().enumerate() {
            if steps[..i].iter().any(|s| s.id == step.id) {
                return Err(ScriptError::DuplicateId(step.id));
            }
        }
        let index_of = |id: StepId| steps.iter().position(|s| s.id == id);
        let check = |from_idx: usize, cont: Continuation| -> Result<(), ScriptError> {
            let Continuation::Goto(to) = cont else {
                return Ok(());
            };
            let Some(to_idx) = index_of(to) else {
                return Err(ScriptError::UnknownStep(to));
            };
            if to_idx <= from_idx {
                return Err(ScriptError::BackwardEdge {
                    from: steps[from_idx].id,
                    to,
                });
            }
            Ok(())
        };
        for (i, step) in steps.iter().enumerate() {
            match step.next {
                NextStep::Always(cont) => check(i, cont)?,
                NextStep::Branch {
                    then, otherwise, ..
                } => {
                    check(i, then)?;
                    check(i, otherwise)?;
                }
            }
        }
        Ok(Self { steps })
    }

    /// Id of the first step.
    pub fn first(&self) -> StepId {
        self.steps[0].id
    }

    /// Look up a step by id.
    pub fn step(&self, id: StepId) -> Option<&Step<K, S>> {
        self.steps.iter().find(|s| s.id == id)
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the script is empty. Always `false` for a validated script.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Iterate over the steps in script order.
    pub fn steps(&self) -> impl Iterator<Item = &Step<K, S>> {
        self.steps.iter()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use smallvec::smallvec;

    use super::*;

    struct S;

    fn step(id: u32, next: NextStep<S>) -> Step<&'static str, S> {
        Step {
            id: StepId(id),
            target: "t",
            highlights: smallvec!["t"],
            title: "",
            body: "",
            advance: AdvanceRule::TargetClick,
            next,
        }
    }

    #[test]
    fn empty_script_is_rejected() {
        assert_eq!(
            Script::<&str, S>::new(vec![]).err(),
            Some(ScriptError::Empty)
        );
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = Script::new(vec![
            step(0, NextStep::Always(Continuation::Finish)),
            step(0, NextStep::Always(Continuation::Finish)),
        ])
        .err();
        assert_eq!(err, Some(ScriptError::DuplicateId(StepId(0))));
    }

    #[test]
    fn dangling_edges_are_rejected() {
        let err = Script::new(vec![step(
            0,
            NextStep::Always(Continuation::Goto(StepId(9))),
        )])
        .err();
        assert_eq!(err, Some(ScriptError::UnknownStep(StepId(9))));
    }

    #[test]
    fn backward_edges_are_rejected() {
        let err = Script::new(vec![
            step(0, NextStep::Always(Continuation::Goto(StepId(1)))),
            step(1, NextStep::Always(Continuation::Goto(StepId(0)))),
        ])
        .err();
        assert_eq!(
            err,
            Some(ScriptError::BackwardEdge {
                from: StepId(1),
                to: StepId(0),
            })
        );
    }

    #[test]
    fn self_edges_are_rejected() {
        let err = Script::new(vec![step(
            0,
            NextStep::Always(Continuation::Goto(StepId(0))),
        )])
        .err();
        assert!(matches!(err, Some(ScriptError::BackwardEdge { .. })));
    }

    #[test]
    fn branch_arms_are_both_checked() {
        let err = Script::new(vec![
            step(
                0,
                NextStep::Branch {
                    when: |_: &S| true,
                    then: Continuation::Goto(StepId(1)),
                    otherwise: Continuation::Goto(StepId(7)),
                },
            ),
            step(1, NextStep::Always(Continuation::Finish)),
        ])
        .err();
        assert_eq!(err, Some(ScriptError::UnknownStep(StepId(7))));
    }

    #[test]
    fn valid_linear_script_passes() {
        let script = Script::new(vec![
            step(0, NextStep::Always(Continuation::Goto(StepId(1)))),
            step(1, NextStep::Always(Continuation::Finish)),
        ])
        .unwrap();
        assert_eq!(script.first(), StepId(0));
        assert_eq!(script.len(), 2);
        assert!(script.step(StepId(1)).is_some());
        assert!(script.step(StepId(9)).is_none());
    }
}
