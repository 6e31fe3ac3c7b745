//! Scripted gesture input.
//!
//! A gesture script stands in for the pointer and widget layers: it is an
//! ordered list of slider changes, drag gestures, clears, and export requests
//! replayed against an [`InputState`].
//!
//! # Example TOML
//! ```toml
//! [[step]]
//! action = "set-channel"
//! channel = "red"
//! value = 1.0
//!
//! [[step]]
//! action = "set-width"
//! width = 4.0
//!
//! [[step]]
//! action = "drag"
//! points = [[10.0, 10.0], [20.0, 10.0], [30.0, 10.0]]
//!
//! [[step]]
//! action = "export"
//! ```

use crate::draw::Point;
use crate::input::{Channel, DragEvent, InputState};
use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// One scripted user action.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum ScriptStep {
    /// Move one color slider
    SetChannel { channel: Channel, value: f64 },
    /// Move the width slider
    SetWidth { width: f64 },
    /// One drag gesture: start at the first point, move through the rest, release
    Drag { points: Vec<[f64; 2]> },
    /// Press the clear button
    Clear,
    /// Press the export button
    Export,
}

/// Ordered list of scripted steps.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GestureScript {
    #[serde(default, rename = "step")]
    pub steps: Vec<ScriptStep>,
}

impl GestureScript {
    /// Loads a script from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let script_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read script from {}", path.display()))?;
        Self::parse(&script_str)
            .with_context(|| format!("Failed to parse script from {}", path.display()))
    }

    /// Parses a script from TOML text, rejecting drags without points or with
    /// non-finite coordinates.
    pub fn parse(script_str: &str) -> Result<Self> {
        let script: Self = toml::from_str(script_str)?;
        for (index, step) in script.steps.iter().enumerate() {
            let ScriptStep::Drag { points } = step else {
                continue;
            };
            if points.is_empty() {
                bail!("Step {} is a drag with no points", index + 1);
            }
            if let Some([x, y]) = points
                .iter()
                .find(|[x, y]| !x.is_finite() || !y.is_finite())
            {
                bail!(
                    "Step {} has a non-finite drag point ({}, {})",
                    index + 1,
                    x,
                    y
                );
            }
        }
        Ok(script)
    }

    /// Replays every step against `state`.
    ///
    /// `on_export` is called for each export step with the state as it is at
    /// that point; an error from it stops the replay. Returns the number of
    /// export steps run.
    pub fn replay<F>(&self, state: &mut InputState, mut on_export: F) -> Result<usize>
    where
        F: FnMut(&InputState) -> Result<()>,
    {
        let mut exports = 0;
        for step in &self.steps {
            match step {
                ScriptStep::SetChannel { channel, value } => state.set_channel(*channel, *value),
                ScriptStep::SetWidth { width } => state.set_stroke_width(*width),
                ScriptStep::Drag { points } => replay_drag(state, points),
                ScriptStep::Clear => state.clear_all(),
                ScriptStep::Export => {
                    on_export(state)?;
                    exports += 1;
                }
            }
        }
        Ok(exports)
    }
}

fn replay_drag(state: &mut InputState, points: &[[f64; 2]]) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };
    state.handle_drag(DragEvent::Start(Point::from(*first)));
    for point in rest {
        state.handle_drag(DragEvent::Move(Point::from(*point)));
    }
    state.handle_drag(DragEvent::End);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::RED;

    const SCRIPT: &str = r#"
        [[step]]
        action = "set-channel"
        channel = "red"
        value = 1.0

        [[step]]
        action = "set-width"
        width = 6.0

        [[step]]
        action = "drag"
        points = [[10.0, 10.0], [20.0, 10.0], [30.0, 10.0]]

        [[step]]
        action = "export"

        [[step]]
        action = "clear"

        [[step]]
        action = "drag"
        points = [[1.0, 2.0]]
    "#;

    #[test]
    fn parse_reads_all_steps() {
        let script = GestureScript::parse(SCRIPT).unwrap();
        assert_eq!(script.steps.len(), 6);
        assert_eq!(
            script.steps[0],
            ScriptStep::SetChannel {
                channel: Channel::Red,
                value: 1.0
            }
        );
        assert_eq!(script.steps[3], ScriptStep::Export);
    }

    #[test]
    fn parse_rejects_empty_drag() {
        let err = GestureScript::parse(
            r#"
            [[step]]
            action = "drag"
            points = []
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("no points"));
    }

    #[test]
    fn parse_rejects_non_finite_points() {
        for bad in ["[[1.0, 2.0], [nan, 3.0]]", "[[inf, 0.0]]", "[[0.0, -inf]]"] {
            let script = format!("[[step]]\naction = \"drag\"\npoints = {}\n", bad);
            let err = GestureScript::parse(&script).unwrap_err();
            assert!(err.to_string().contains("non-finite"), "{}", bad);
        }
    }

    #[test]
    fn parse_rejects_unknown_action() {
        assert!(GestureScript::parse("[[step]]\naction = \"undo\"\n").is_err());
    }

    #[test]
    fn replay_applies_steps_in_order() {
        let script = GestureScript::parse(SCRIPT).unwrap();
        let mut state = InputState::default();
        let mut seen = Vec::new();

        let exports = script
            .replay(&mut state, |snapshot| {
                seen.push(snapshot.canvas.strokes().len());
                Ok(())
            })
            .unwrap();

        assert_eq!(exports, 1);
        assert_eq!(seen, vec![1]);

        let strokes = state.canvas.strokes();
        assert_eq!(strokes.len(), 1);
        assert_eq!(strokes[0].points().len(), 1);
        assert_eq!(strokes[0].color(), RED);
        assert_eq!(strokes[0].width(), 6.0);
    }

    #[test]
    fn replay_stops_on_export_error() {
        let script = GestureScript::parse(SCRIPT).unwrap();
        let mut state = InputState::default();

        let result = script.replay(&mut state, |_| bail!("disk full"));
        assert!(result.is_err());
        // The clear after the failed export never ran.
        assert_eq!(state.canvas.strokes().len(), 1);
    }
}
