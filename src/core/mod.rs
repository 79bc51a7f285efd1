pub mod axis;
pub mod census;
pub mod dataset;
pub mod loader;
pub mod projection;
pub mod scale;
pub mod types;

pub use axis::{AxisDefinition, AxisDomain, Dimension};
pub use dataset::{DataSet, Record, Value};
pub use loader::{ColumnKind, NumericParsePolicy, TableLoader, TableSchema, load_table};
pub use projection::project_records;
pub use scale::{LinearScale, TickValues, format_tick};
pub use types::{ChartLayout, Margins, ScreenPoint, Viewport};
