pub mod color_bar;
pub mod smooth_plot;
pub mod ticks;

pub use color_bar::{
    ColorBarSpec, add_color_bar, gradient_color_bar, layout_color_bar, path_color_bar,
    render_color_bar,
};
pub use smooth_plot::{SmoothPlot, render_smooth_plot, smooth_legend_glyph};
pub use ticks::{
    GridLineSpec, TickAlign, TickLabelSpec, TickSpec, decimal_tick_labels, linear_ticks,
    tick_grid_lines,
};
