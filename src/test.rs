/// Check for equality between two components, allowing for the rounding
/// errors of the 0-255 scale formulas.
#[macro_export]
macro_rules! assert_component_eq {
    ($actual:expr, $expected:expr) => {{
        approx::assert_abs_diff_eq!(
            $actual as $crate::Component,
            $expected as $crate::Component,
            epsilon = 1.0e-9
        );
    }};
}
