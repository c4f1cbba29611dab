#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod font;
mod image;
mod labels;
mod model;
mod pdf;
mod render;

pub use font::{FontError, TrueTypeFont};
pub use image::{Image, ImageError, ImageFormat};
pub use labels::Labels;
pub use model::{Document, LayoutError, Section};
pub use pdf::{PdfError, serialize};
pub use render::{RenderError, RenderState, Renderer, file_name, render};
