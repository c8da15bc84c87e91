//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `Header`: Static title and tagline
//! - `TitleBar`: Top status line showing endpoint and status
//! - `ResultCard`: The last prediction, with optional comparison table
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `InputForm`: Controlled text area + submit button. Owns only its cursor.
//!
//! ### Props-Based Data Flow
//!
//! Components receive external data as "props" (struct fields), never by
//! reaching into `App`. Intent flows back up as events (`FormEvent`), and only
//! the event loop turns those into core `Action`s.
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── header.rs        (Title + tagline)
//! ├── title_bar.rs     (Status line)
//! ├── result_card.rs   (Prediction summary + comparison table)
//! └── input_form/      (Text area + submit button)
//! ```

pub mod header;
pub mod input_form;
pub mod result_card;
pub mod title_bar;

pub use header::Header;
pub use input_form::{FormEvent, InputForm};
pub use result_card::{ResultCard, Treatment, treatment};
pub use title_bar::TitleBar;
