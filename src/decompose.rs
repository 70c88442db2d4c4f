use alloc::vec::Vec;

use crate::filters::{Biquad, CoefficientSet};
use crate::sample::{AxisSeries, Sample, axes_to_samples};
use crate::vector::Vector3;

/// Split total acceleration into user and gravity components.
///
/// Each axis is low-pass filtered on its own to estimate gravity; the user
/// component is whatever the filter removed, `total - gravity`. Output order
/// matches input order.
pub fn decompose(totals: &[Vector3], gravity_coefficients: &CoefficientSet) -> Vec<Sample> {
    let filter = Biquad::new(*gravity_coefficients);
    let total = AxisSeries::from_vectors(totals);

    let gravity = total.map(|axis| {
        log::trace!("extracting gravity from {} samples", axis.len());
        filter.apply(axis)
    });
    let user = total.difference(&gravity);

    axes_to_samples(&user, &gravity)
}
