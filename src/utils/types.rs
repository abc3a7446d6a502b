/// Alias to a scalar floating type.
///
/// NOTE: objective values and distances are kept in `f64`: the normalization step divides
/// by hyperplane intercepts and `f32` loses too much precision there.
pub type Float = f64;
