//! Gesture scripts: pointer events written down as text, and replaying them onto a painting.
//!
//! ```text
//! # a short flick, then a pause
//! color #c0392b
//! down 10 10
//! move 40 12
//! move 40 12
//! up
//! ```

use crate::color::Color;
use crate::engine::Painting;
use crate::geom::Point;
use crate::random::RandomSource;
use crate::util::ResultExt;
use glam::vec2;
use itertools::Itertools;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ScriptError {
	#[error("line {line}: unknown command `{command}`")]
	UnknownCommand { line: usize, command: String },
	#[error("line {line}: `{command}` takes {expected}, got {got} argument(s)")]
	Arity {
		line: usize,
		command: &'static str,
		expected: &'static str,
		got: usize,
	},
	#[error("line {line}: `{value}` is not a finite number")]
	BadNumber { line: usize, value: String },
}
use ScriptError::*;

static_assertions::assert_impl_all!(ScriptError: std::error::Error, Send, Sync);

#[derive(Clone, Debug, PartialEq, derive_more::Display)]
pub enum Command {
	#[display("down {} {}", _0.x, _0.y)]
	Down(Point),
	#[display("move {} {}", _0.x, _0.y)]
	Move(Point),
	#[display("up")]
	Up,
	/// Any CSS color; checked only when replayed.
	#[display("color {_0}")]
	Color(String),
	#[display("clear")]
	Clear,
}

fn parse_number(line: usize, value: &str) -> Result<f32, ScriptError> {
	match value.parse::<f32>() {
		Ok(number) if number.is_finite() => Ok(number),
		_ => Err(BadNumber {
			line,
			value: value.to_owned(),
		}),
	}
}

fn parse_point(line: usize, command: &'static str, args: &[&str]) -> Result<Point, ScriptError> {
	let Some((x, y)) = args.iter().collect_tuple() else {
		return Err(Arity {
			line,
			command,
			expected: "x and y",
			got: args.len(),
		});
	};
	Ok(vec2(parse_number(line, x)?, parse_number(line, y)?))
}

fn expect_no_args(line: usize, command: &'static str, args: &[&str]) -> Result<(), ScriptError> {
	if args.is_empty() {
		Ok(())
	} else {
		Err(Arity {
			line,
			command,
			expected: "nothing",
			got: args.len(),
		})
	}
}

/// Parses one line. Blank lines and comments yield `None`.
///
/// Only whole lines are comments, since `#` also starts hex colors.
pub fn parse_line(line: usize, text: &str) -> Result<Option<Command>, ScriptError> {
	let mut words = text.split_whitespace();
	let Some(command) = words.next() else {
		return Ok(None);
	};
	if command.starts_with('#') {
		return Ok(None);
	}
	let args = words.collect_vec();
	let command = match command {
		"down" => Command::Down(parse_point(line, "down", &args)?),
		"move" => Command::Move(parse_point(line, "move", &args)?),
		"up" => {
			expect_no_args(line, "up", &args)?;
			Command::Up
		}
		"clear" => {
			expect_no_args(line, "clear", &args)?;
			Command::Clear
		}
		// CSS colors may contain spaces, e.g. `rgb(0 0 0)`.
		"color" if !args.is_empty() => Command::Color(args.join(" ")),
		"color" => Err(Arity {
			line,
			command: "color",
			expected: "a color",
			got: 0,
		})?,
		other => Err(UnknownCommand {
			line,
			command: other.to_owned(),
		})?,
	};
	Ok(Some(command))
}

pub fn parse_script(text: &str) -> Result<Vec<Command>, ScriptError> {
	text
		.lines()
		.enumerate()
		.filter_map(|(index, line)| parse_line(index + 1, line).transpose())
		.collect()
}

/// Tallies of what a replay drew.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReplaySummary {
	pub gestures: u32,
	pub segments: u32,
	pub dwells: u32,
	pub splatter_dots: u32,
	pub blots: u32,
	pub clears: u32,
}

pub fn replay<R: RandomSource>(painting: &mut Painting<R>, commands: &[Command]) -> ReplaySummary {
	let mut summary = ReplaySummary::default();
	for command in commands {
		match command {
			Command::Down(point) => painting.pointer_down(*point),
			Command::Move(point) => {
				if let Some(step) = painting.pointer_move(*point) {
					summary.segments += 1;
					summary.splatter_dots += step.splatter_dots();
					summary.blots += step.dwell_blots;
					if step.is_dwell() {
						summary.dwells += 1;
					}
				}
			}
			Command::Up => {
				if let Some(end) = painting.pointer_up() {
					summary.gestures += 1;
					summary.splatter_dots += end.dots;
				}
			}
			Command::Color(color) => {
				let parsed = color
					.parse::<Color>()
					.ok_or_log_with("ignoring unparsable color");
				if let Some(color) = parsed {
					painting.set_color(color);
				}
			}
			Command::Clear => {
				painting.clear();
				summary.clears += 1;
			}
		}
	}
	summary
}
