mod chart;
pub use self::chart::{
    AdjCloseIndicator, Chart, ChartError, ChartMeta, ChartResponse, ChartResult, Indicators,
    QuoteIndicator,
};
