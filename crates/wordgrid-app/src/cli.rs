//! Command line arguments.

use crate::app::AppError;
use clap::Parser;
use kurbo::Point;
use std::path::PathBuf;
use std::str::FromStr;
use wordgrid_core::alphabet::Alphabet;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "wordgrid", about = "Generate a word-search board and replay drags over it")]
pub struct Cli {
    /// JSON game config; flags below override its values.
    #[arg(long, env = "WORDGRID_CONFIG")]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub rows: Option<usize>,

    #[arg(long)]
    pub cols: Option<usize>,

    /// Surface width in pixels.
    #[arg(long)]
    pub width: Option<f64>,

    /// Surface height in pixels.
    #[arg(long)]
    pub height: Option<f64>,

    #[arg(long, env = "WORDGRID_SEED")]
    pub seed: Option<u64>,

    /// `latin`, `arabic`, or a literal set of letters.
    #[arg(long)]
    pub alphabet: Option<Alphabet>,

    /// Drag from (x1, y1) to (x2, y2) in surface pixels. Repeatable.
    #[arg(long = "drag", value_name = "X1,Y1,X2,Y2")]
    pub drags: Vec<DragSpec>,

    /// Print only the cells covered by hidden words.
    #[arg(long)]
    pub solution: bool,

    /// Words to hide.
    pub words: Vec<String>,
}

/// One press-drag-release gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSpec {
    pub from: Point,
    pub to: Point,
}

impl FromStr for DragSpec {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(',')
            .map(|v| v.trim().parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| AppError::InvalidDrag(format!("{s}: {e}")))?;
        match values[..] {
            [x1, y1, x2, y2] if values.iter().all(|v| v.is_finite()) => Ok(Self {
                from: Point::new(x1, y1),
                to: Point::new(x2, y2),
            }),
            _ => Err(AppError::InvalidDrag(format!("{s}: expected four finite numbers x1,y1,x2,y2"))),
        }
    }
}
