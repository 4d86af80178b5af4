mod plot_sheets;

pub use plot_sheets::PlotSheets;
