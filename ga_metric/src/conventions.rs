/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2026 The ga_core Contributors. All Rights Reserved.
 */
use crate::error::MetricError;
use crate::metric::Metric;

/// A Lorentzian (one timelike, rest spacelike or vice versa) signature,
/// abstracted over which sign convention the timelike direction uses.
pub trait LorentzianMetric: Copy {
    fn time_sign(&self) -> i32;
    fn space_sign(&self) -> i32;
    fn dimension(&self) -> usize;
    fn signature(&self) -> (usize, usize, usize);
    fn is_west_coast(&self) -> bool {
        self.time_sign() > 0
    }
    fn is_east_coast(&self) -> bool {
        self.time_sign() < 0
    }
    fn into_metric(self) -> Metric;
    fn inner(&self) -> Metric;
    fn minkowski_4d() -> Self;
    fn minkowski_3d() -> Self;
}

fn validate(metric: Metric, want_time_sign: i32) -> Result<(), MetricError> {
    let dim = metric.dimension();
    if dim < 2 {
        return Err(MetricError::invalid_dimension(
            "a Lorentzian metric needs at least one time and one space dimension",
        ));
    }
    let signs = metric.to_signs();
    if signs[0] != want_time_sign {
        return Err(MetricError::sign_convention_mismatch(format!(
            "expected time_sign {want_time_sign}, found {}",
            signs[0]
        )));
    }
    if signs[1..].iter().any(|&s| s != -want_time_sign) {
        return Err(MetricError::sign_convention_mismatch(
            "space directions must all carry the opposite sign from time",
        ));
    }
    Ok(())
}

/// West Coast convention: `(+---...)`, `e0^2 = +1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WestCoastMetric(Metric);

impl WestCoastMetric {
    pub const MINKOWSKI_4D: WestCoastMetric = WestCoastMetric(Metric::Minkowski(4));
    pub const MINKOWSKI_3D: WestCoastMetric = WestCoastMetric(Metric::Minkowski(3));

    pub fn new(metric: Metric) -> Result<Self, MetricError> {
        validate(metric, 1)?;
        Ok(WestCoastMetric(metric))
    }

    pub fn new_nd(dim: usize) -> Result<Self, MetricError> {
        if !(2..=64).contains(&dim) {
            return Err(MetricError::invalid_dimension(format!(
                "dimension must be in 2..=64, found {dim}"
            )));
        }
        Ok(WestCoastMetric(Metric::Minkowski(dim)))
    }

    pub fn from_east_coast(metric: Metric) -> Result<Self, MetricError> {
        validate(metric, -1)?;
        WestCoastMetric::new(metric.flip_time_space())
    }

    pub fn as_metric(&self) -> Metric {
        self.0
    }
}

impl LorentzianMetric for WestCoastMetric {
    fn time_sign(&self) -> i32 {
        1
    }
    fn space_sign(&self) -> i32 {
        -1
    }
    fn dimension(&self) -> usize {
        self.0.dimension()
    }
    fn signature(&self) -> (usize, usize, usize) {
        self.0.signature()
    }
    fn into_metric(self) -> Metric {
        self.0
    }
    fn inner(&self) -> Metric {
        self.0
    }
    fn minkowski_4d() -> Self {
        WestCoastMetric::MINKOWSKI_4D
    }
    fn minkowski_3d() -> Self {
        WestCoastMetric::MINKOWSKI_3D
    }
}

/// East Coast convention: `(-+++...)`, `e0^2 = -1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EastCoastMetric(Metric);

impl EastCoastMetric {
    pub const MINKOWSKI_4D: EastCoastMetric = EastCoastMetric(Metric::Custom {
        dim: 4,
        neg_mask: 0b0001,
        zero_mask: 0,
    });
    pub const MINKOWSKI_3D: EastCoastMetric = EastCoastMetric(Metric::Custom {
        dim: 3,
        neg_mask: 0b001,
        zero_mask: 0,
    });

    pub fn new(metric: Metric) -> Result<Self, MetricError> {
        validate(metric, -1)?;
        Ok(EastCoastMetric(metric))
    }

    pub fn new_nd(dim: usize) -> Result<Self, MetricError> {
        if !(2..=64).contains(&dim) {
            return Err(MetricError::invalid_dimension(format!(
                "dimension must be in 2..=64, found {dim}"
            )));
        }
        Ok(EastCoastMetric(Metric::Custom {
            dim,
            neg_mask: 1,
            zero_mask: 0,
        }))
    }

    pub fn from_west_coast(metric: Metric) -> Result<Self, MetricError> {
        validate(metric, 1)?;
        EastCoastMetric::new(metric.flip_time_space())
    }

    pub fn as_metric(&self) -> Metric {
        self.0
    }
}

impl LorentzianMetric for EastCoastMetric {
    fn time_sign(&self) -> i32 {
        -1
    }
    fn space_sign(&self) -> i32 {
        1
    }
    fn dimension(&self) -> usize {
        self.0.dimension()
    }
    fn signature(&self) -> (usize, usize, usize) {
        self.0.signature()
    }
    fn into_metric(self) -> Metric {
        self.0
    }
    fn inner(&self) -> Metric {
        self.0
    }
    fn minkowski_4d() -> Self {
        EastCoastMetric::MINKOWSKI_4D
    }
    fn minkowski_3d() -> Self {
        EastCoastMetric::MINKOWSKI_3D
    }
}

/// `Some(true)` for East Coast, `Some(false)` for West Coast, `None` when
/// `metric` doesn't fit either pattern (e.g. Euclidean, or degenerate).
pub fn detect_convention(metric: &Metric) -> Option<bool> {
    if EastCoastMetric::new(*metric).is_ok() {
        Some(true)
    } else if WestCoastMetric::new(*metric).is_ok() {
        Some(false)
    } else {
        None
    }
}

/// True when `metric` is a non-degenerate Lorentzian signature in either
/// sign convention.
pub fn is_lorentzian(metric: &Metric) -> bool {
    detect_convention(metric).is_some()
}

pub fn west_to_east(metric: &Metric) -> Result<EastCoastMetric, MetricError> {
    EastCoastMetric::from_west_coast(*metric)
}

pub fn east_to_west(metric: &Metric) -> Result<WestCoastMetric, MetricError> {
    WestCoastMetric::from_east_coast(*metric)
}
