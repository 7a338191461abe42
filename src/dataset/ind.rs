use super::Dataset;

/// Intersection recordings (inD layout). Registered so the name
/// resolves, but the transform is still missing: `convert` falls through
/// to the trait default and reports that.
pub struct InD;

impl Dataset for InD {
    fn name(&self) -> &'static str {
        "inD"
    }
}
