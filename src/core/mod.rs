pub mod field;
pub mod loader;
pub mod record;
pub mod scale;
pub mod ticks;
pub mod types;

pub use field::{Axis, AxisSelection, Field, FieldSpec};
pub use loader::{REQUIRED_COLUMNS, load_records_from_path, load_records_from_reader};
pub use record::{RecordSet, StateRecord};
pub use scale::{LinearScale, ScalePadding};
pub use ticks::{format_tick, nice_ticks};
pub use types::{Margins, PlotArea, Viewport};
