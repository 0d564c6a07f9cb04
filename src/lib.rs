pub mod interpolation;

pub use interpolation::{
    divided_difference_table,
    evaluate,
    render_formula,
    sample_curve,
};
