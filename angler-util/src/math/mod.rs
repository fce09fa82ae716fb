pub mod vector3;

/// Wraps an angle in degrees into the `[-180, 180)` range.
#[must_use]
pub fn wrap_degrees(degrees: f32) -> f32 {
    let wrapped = degrees % 360.0;
    if wrapped >= 180.0 {
        wrapped - 360.0
    } else if wrapped < -180.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod test {
    use super::wrap_degrees;

    #[test]
    fn wraps_into_half_open_range() {
        assert!((wrap_degrees(190.0) - -170.0).abs() < f32::EPSILON);
        assert!((wrap_degrees(-190.0) - 170.0).abs() < f32::EPSILON);
        assert!((wrap_degrees(180.0) - -180.0).abs() < f32::EPSILON);
        assert!((wrap_degrees(45.0) - 45.0).abs() < f32::EPSILON);
    }
}
