//! WordGrid Core Library
//!
//! Platform-agnostic board generation, layout and gesture handling for the
//! WordGrid word-search game.

pub mod alphabet;
pub mod board;
pub mod config;
pub mod direction;
pub mod game;
pub mod generator;
pub mod geometry;
pub mod input;
pub mod layout;
pub mod letter;
pub mod resolver;
pub mod snap;
pub mod style;
pub mod walker;

pub use alphabet::Alphabet;
pub use board::{Board, BoardError, WordPlacement};
pub use config::{ConfigError, ConfigResult, GameConfig};
pub use direction::{Direction, DirectionError, get_direction};
pub use game::{Game, GameError};
pub use generator::{BoardGenerator, DEFAULT_MAX_ATTEMPTS, GenerateError, PlacementMap, is_valid_placement};
pub use geometry::{Angle, UNSET_POINT, angle_between};
pub use input::{GestureTracker, PointerEvent, SelectionEvent};
pub use layout::GridLayout;
pub use letter::Letter;
pub use resolver::resolve_word;
pub use snap::{DragSnapResult, snap_drag_endpoint};
pub use style::{Palette, SerializableColor};
