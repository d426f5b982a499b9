//! Stage composition.
//!
//! A [`Pipeline`] runs the shape stage and then refines its label through
//! each later stage up to a configured depth. The full pipeline is
//! `confirm(categorize(shape(record)))`.

use serde::Serialize;
use serde_json::Value;

use crate::batch::{BatchReport, Classified};
use crate::label::Label;
use crate::record::{Input, Record};
use crate::stage::{classify_shape, Stage};

/// One stage's output within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Step {
    pub stage: Stage,
    pub label: Label,
}

/// All labels produced by one run, in stage order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trace {
    steps: Vec<Step>,
    label: Label,
}

impl Trace {
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Label from the last stage that ran.
    pub fn last(&self) -> Label {
        self.label
    }

    /// Label emitted by `stage`, if the run reached it.
    pub fn label_at(&self, stage: Stage) -> Option<Label> {
        self.steps.iter().find(|s| s.stage == stage).map(|s| s.label)
    }

    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }
}

/// Three-stage classifier, optionally cut short after an earlier stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pipeline {
    through: Stage,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self {
            through: Stage::Confirm,
        }
    }
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pipeline that stops after `stage`.
    pub fn through(stage: Stage) -> Self {
        Self { through: stage }
    }

    pub fn last_stage(&self) -> Stage {
        self.through
    }

    /// Stages this pipeline runs, in order.
    pub fn stages(&self) -> impl Iterator<Item = Stage> {
        let through = self.through;
        Stage::ALL.into_iter().filter(move |s| *s <= through)
    }

    /// Classify an arbitrary JSON value (non-objects are not records).
    pub fn classify(&self, input: &Value) -> Label {
        self.walk(Input::from_json(input), |_| {})
    }

    pub fn classify_record(&self, record: &Record) -> Label {
        self.walk(Input::from_record(record), |_| {})
    }

    pub fn trace(&self, input: &Value) -> Trace {
        let mut steps = Vec::with_capacity(Stage::ALL.len());
        let label = self.walk(Input::from_json(input), |step| steps.push(step));
        Trace { steps, label }
    }

    /// Run every input through the pipeline, keeping input order.
    pub fn run_batch(&self, inputs: &[Value]) -> BatchReport {
        let results = inputs
            .iter()
            .enumerate()
            .map(|(index, input)| {
                let trace = self.trace(input);
                Classified {
                    index,
                    input: input.clone(),
                    label: trace.last(),
                    steps: trace.into_steps(),
                }
            })
            .collect();

        BatchReport {
            through: self.through,
            results,
        }
    }

    fn walk(&self, input: Input<'_>, mut visit: impl FnMut(Step)) -> Label {
        let mut stage = Stage::Shape;
        let mut label = classify_shape(input);
        tracing::debug!(stage = %stage, label = %label, "stage complete");
        visit(Step { stage, label });

        while let Some(next) = stage.next().filter(|s| *s <= self.through) {
            let Some(refined) = next.refine(label.as_str()) else {
                break;
            };
            tracing::debug!(stage = %next, from = %label, label = %refined, "stage complete");
            visit(Step {
                stage: next,
                label: refined,
            });
            stage = next;
            label = refined;
        }

        label
    }
}

/// Classify with the full three-stage pipeline.
pub fn classify(input: &Value) -> Label {
    Pipeline::default().classify(input)
}
