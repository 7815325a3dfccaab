//! Shared pieces of the `route` demo: layered map loading, argument
//! parsing and a text rendering of a search outcome.

use std::fmt;
use std::path::PathBuf;

use waypath_core::{Point, Range};
use waypath_layers::{LayerError, LayerStack, Legend, TileLayer};
use waypath_paths::{PathOutcome, Walkable};

/// Map used when no file is given: a floor, a wall layer and a furniture
/// layer that blocks the direct route.
pub const DEFAULT_MAP: &str = "\
--- floor
..........
..........
..........
..........
..........
--- walls
___#______
___#__#___
___#__#___
______#___
______#___
--- furniture
__________
__________
_______#__
__________
__________";

const PATH_GLYPH: char = '*';
const START_GLYPH: char = 'S';
const GOAL_GLYPH: char = 'G';
const BLOCKED_GLYPH: char = '#';
const OPEN_GLYPH: char = '.';

// ---------------------------------------------------------------------------
// Map loading
// ---------------------------------------------------------------------------

/// Build a [`LayerStack`] from text where each layer starts with a line
/// beginning with `---`, optionally followed by the layer name.
///
/// Lines before the first separator form a layer called `base`.
pub fn load_stack(text: &str, legend: &Legend) -> Result<LayerStack, LayerError> {
    let mut stack = LayerStack::new();
    let mut name = String::from("base");
    let mut body = String::new();

    for line in text.lines() {
        if let Some(rest) = line.strip_prefix("---") {
            if !body.trim_matches('\n').is_empty() {
                stack.push(TileLayer::parse(name.as_str(), &body, legend)?);
            }
            let rest = rest.trim();
            name = if rest.is_empty() {
                format!("layer{}", stack.len())
            } else {
                rest.to_string()
            };
            body.clear();
            continue;
        }
        body.push_str(line);
        body.push('\n');
    }
    if !body.trim_matches('\n').is_empty() || stack.is_empty() {
        stack.push(TileLayer::parse(name, &body, legend)?);
    }
    log::debug!("loaded {} layers covering {}", stack.len(), stack.bounds());
    Ok(stack)
}

// ---------------------------------------------------------------------------
// Arguments
// ---------------------------------------------------------------------------

/// Parsed command line of `route`.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteArgs {
    pub map: Option<PathBuf>,
    /// Start and goal as world positions, truncated to cells by the search.
    pub endpoints: Option<((f32, f32), (f32, f32))>,
}

/// Errors from [`RouteArgs::parse`].
#[derive(Debug, Clone, PartialEq)]
pub enum ArgsError {
    /// Wrong number of arguments.
    Usage,
    /// A coordinate did not parse as a number.
    BadCoordinate(String),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Usage => write!(f, "usage: route [MAP] [SX SY GX GY]"),
            Self::BadCoordinate(s) => write!(f, "invalid coordinate \u{201c}{s}\u{201d}"),
        }
    }
}

impl std::error::Error for ArgsError {}

impl RouteArgs {
    /// Parse arguments, not including the program name.
    pub fn parse<I, S>(args: I) -> Result<Self, ArgsError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        let (map, coords) = match args.len() {
            0 | 4 => (None, &args[..]),
            1 | 5 => (Some(PathBuf::from(&args[0])), &args[1..]),
            _ => return Err(ArgsError::Usage),
        };
        let endpoints = if coords.is_empty() {
            None
        } else {
            let n = coords
                .iter()
                .map(|s| s.parse::<f32>().map_err(|_| ArgsError::BadCoordinate(s.clone())))
                .collect::<Result<Vec<_>, _>>()?;
            Some(((n[0], n[1]), (n[2], n[3])))
        };
        Ok(Self { map, endpoints })
    }
}

/// Default endpoints: opposite corners of `bounds`.
pub fn default_endpoints(bounds: Range) -> (Point, Point) {
    (bounds.min, bounds.max.shift(-1, -1))
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Draw the walkability of `bounds` with the outcome's path on top.
pub fn render<W: Walkable + ?Sized>(
    oracle: &W,
    bounds: Range,
    from: Point,
    to: Point,
    outcome: &PathOutcome,
) -> String {
    let path = outcome.path();
    let mut out = String::with_capacity(bounds.len() + bounds.height().max(0) as usize);
    for p in bounds {
        let ch = if p == from {
            START_GLYPH
        } else if p == to {
            GOAL_GLYPH
        } else if path.contains(&p) {
            PATH_GLYPH
        } else if oracle.is_walkable(p) {
            OPEN_GLYPH
        } else {
            BLOCKED_GLYPH
        };
        out.push(ch);
        if p.x == bounds.max.x - 1 {
            out.push('\n');
        }
    }
    out
}

/// One-line description of how a search ended.
pub fn summary(outcome: &PathOutcome, to: Point) -> String {
    match outcome {
        PathOutcome::Reached(path) => format!("reached {to} in {} steps", path.len()),
        PathOutcome::Partial(path) => match path.last() {
            Some(last) => format!(
                "{to} unreachable; closest approach {last} after {} steps",
                path.len()
            ),
            None => format!("{to} unreachable"),
        },
        PathOutcome::NoPath => format!("no move gets closer to {to}"),
    }
}
