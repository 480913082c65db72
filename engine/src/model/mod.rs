pub mod document;
pub mod element;
pub mod preset;
pub mod style;

pub use document::{Block, Document};
pub use element::{
    AlignItems, BlockLayout, ConditionalConfig, ConditionalOp, Constraints, Direction, Element,
    GeometryUnit, JustifyContent, LayoutMode, Padding, RepeatConfig, SizeMode, SizeUnit, Sizing,
};
pub use preset::BlockPreset;
pub use style::Style;
