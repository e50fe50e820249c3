/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// Objects keep the order their keys are written in, which is the order the
/// resulting block entries are rendered in.
///
/// Any other expression is converted with [`to_value`](crate::to_value). If that
/// conversion fails, for example for an enum struct variant, the macro yields
/// [`Value::Null`](crate::Value::Null), which renders as the missing-value token.
/// Call `to_value` directly to see the error.
///
/// ```rust
/// use serde_star::{star, Value};
///
/// let optics = star!({
///     "rlnOpticsGroup": 1,
///     "rlnOpticsGroupName": "opticsGroup1",
///     "rlnAmplitudeContrast": 0.1,
///     "rlnMtfFileName": null
/// });
/// assert!(optics.is_object());
/// assert_eq!(star!([1, 2]), Value::Array(vec![Value::from(1), Value::from(2)]));
/// ```
#[macro_export]
macro_rules! star {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::star!($elem)),*])
    };

    ({}) => {
        $crate::Value::Object($crate::StarMap::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::StarMap::new();
        $(
            object.insert($key.to_string(), $crate::star!($value));
        )*
        $crate::Value::Object(object)
    }};

    // Any other expression goes through serde.
    ($s:expr) => {{
        $crate::to_value(&$s).unwrap_or($crate::Value::Null)
    }};
}
