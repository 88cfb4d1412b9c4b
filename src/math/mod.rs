mod mat4;
mod projection;
mod vec3;

pub use mat4::{Mat4, create, multiply, perspective, translate};
pub use projection::{Projection, try_perspective};
pub use vec3::Vec3;

pub const PI: f64 = std::f64::consts::PI;

pub fn to_radians(degrees: f64) -> f64 {
    degrees * (PI / 180.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatrixError;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_matrix(rng: &mut StdRng) -> Mat4 {
        let mut data = [0.0; 16];
        for value in data.iter_mut() {
            *value = rng.random_range(-10.0..10.0);
        }
        Mat4::new(data)
    }

    fn assert_matrix_close(actual: &Mat4, expected: &Mat4, eps: f64) {
        for (index, (a, e)) in actual.data.iter().zip(expected.data.iter()).enumerate() {
            let tolerance = eps * e.abs().max(1.0);
            assert!(
                (a - e).abs() < tolerance,
                "element {} differs: {} vs {}",
                index,
                a,
                e
            );
        }
    }

    #[test]
    fn test_identity_matrix() {
        let identity = create();
        for i in 0..4 {
            for j in 0..4 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_eq!(identity.data[4 * i + j], expected);
            }
        }
        assert_eq!(identity, Mat4::default());
    }

    #[test]
    fn test_identity_is_multiplicative_identity() {
        let mut rng = StdRng::seed_from_u64(7);
        let m = random_matrix(&mut rng);

        assert_matrix_close(&multiply(&create(), &m), &m, 1e-12);
        assert_matrix_close(&multiply(&m, &create()), &m, 1e-12);
    }

    #[test]
    fn test_multiply_row_by_column() {
        let a = Mat4::new(std::array::from_fn(|i| i as f64));
        let b = Mat4::new(std::array::from_fn(|i| (16 - i) as f64));
        let result = multiply(&a, &b);

        // Row 0 of `a` is [0, 1, 2, 3]; column 0 of `b` is [16, 12, 8, 4].
        assert_eq!(result.get(0, 0), 12.0 + 16.0 + 12.0);
        // Row 3 of `a` is [12, 13, 14, 15]; column 2 of `b` is [14, 10, 6, 2].
        assert_eq!(result.get(3, 2), 12.0 * 14.0 + 13.0 * 10.0 + 14.0 * 6.0 + 15.0 * 2.0);
    }

    #[test]
    fn test_multiplication_is_associative() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..32 {
            let a = random_matrix(&mut rng);
            let b = random_matrix(&mut rng);
            let c = random_matrix(&mut rng);

            let left = multiply(&multiply(&a, &b), &c);
            let right = multiply(&a, &multiply(&b, &c));
            assert_matrix_close(&left, &right, 1e-9);
        }
    }

    #[test]
    fn test_multiplication_is_not_commutative() {
        let mut translation = create();
        translate(&mut translation, Vec3::new(1.0, 0.0, 0.0));
        let scale = Mat4::new([
            2.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ]);

        let scale_then_translate = multiply(&translation, &scale);
        let translate_then_scale = multiply(&scale, &translation);

        assert_ne!(scale_then_translate, translate_then_scale);
        assert_eq!(scale_then_translate.get(0, 3), 1.0);
        assert_eq!(translate_then_scale.get(0, 3), 2.0);
    }

    #[test]
    fn test_multiply_does_not_mutate_inputs() {
        let mut rng = StdRng::seed_from_u64(3);
        let a = random_matrix(&mut rng);
        let b = random_matrix(&mut rng);
        let a_bits = a.data.map(f64::to_bits);
        let b_bits = b.data.map(f64::to_bits);

        let _ = multiply(&a, &b);
        let _ = &a * &b;

        assert_eq!(a.data.map(f64::to_bits), a_bits);
        assert_eq!(b.data.map(f64::to_bits), b_bits);
    }

    #[test]
    fn test_mul_operator_matches_multiply() {
        let mut rng = StdRng::seed_from_u64(11);
        let a = random_matrix(&mut rng);
        let b = random_matrix(&mut rng);

        assert_eq!(a * b, multiply(&a, &b));
        assert_eq!(&a * &b, multiply(&a, &b));
    }

    #[test]
    fn test_multiply_propagates_nan() {
        let mut m = create();
        m.data[5] = f64::NAN;
        let result = multiply(&m, &create());
        assert!(result.data[5].is_nan());
        assert!(result.data[4].is_nan());
    }

    #[test]
    fn test_perspective_matrix() {
        let m = perspective(&create(), 90.0, 1.0, 1.0, 100.0);

        let mut expected = [0.0; 16];
        expected[0] = 1.0;
        expected[5] = 1.0;
        expected[10] = -(101.0 / 99.0);
        expected[11] = -(200.0 / 99.0);
        expected[14] = -1.0;

        for (index, (actual, expected)) in m.data.iter().zip(expected).enumerate() {
            assert!(
                (actual - expected).abs() < 1e-9,
                "element {} differs: {} vs {}",
                index,
                actual,
                expected
            );
        }
    }

    #[test]
    fn test_perspective_maps_near_and_far_to_clip_range() {
        let (near, far) = (0.5, 50.0);
        let m = perspective(&create(), 60.0, 1.5, near, far);

        let at_near = m.transform_point(Vec3::new(0.0, 0.0, -near));
        let at_far = m.transform_point(Vec3::new(0.0, 0.0, -far));

        assert!((at_near.z + 1.0).abs() < 1e-9);
        assert!((at_far.z - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_perspective_is_applied_after_existing_matrix() {
        let mut model_view = create();
        translate(&mut model_view, Vec3::new(0.0, 0.0, -5.0));

        let combined = perspective(&model_view, 45.0, 1.0, 0.1, 100.0);
        let projection = perspective(&create(), 45.0, 1.0, 0.1, 100.0);

        assert_eq!(combined, multiply(&projection, &model_view));
        assert_ne!(combined, multiply(&model_view, &projection));
    }

    #[test]
    fn test_perspective_with_equal_planes_is_degenerate() {
        let m = perspective(&create(), 90.0, 1.0, 5.0, 5.0);

        assert!(m.row(2).iter().all(|v| !v.is_finite()));
        assert!((m.get(0, 0) - 1.0).abs() < 1e-9);
        assert_eq!(m.get(3, 2), -1.0);
    }

    #[test]
    fn test_translation_matrix() {
        let mut m = create();
        translate(&mut m, Vec3::new(1.0, 2.0, 3.0));

        let mut expected = create();
        expected.data[3] = 1.0;
        expected.data[7] = 2.0;
        expected.data[11] = 3.0;
        assert_eq!(m, expected);

        let p = m.transform_point(Vec3::new(10.0, 20.0, 30.0));
        assert_eq!(p, Vec3::new(11.0, 22.0, 33.0));
    }

    #[test]
    fn test_translate_accumulates() {
        let mut m = create();
        translate(&mut m, Vec3::new(1.0, 2.0, 3.0));
        translate(&mut m, Vec3::new(1.0, 2.0, 3.0));

        assert_eq!(m.translation(), Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(m.get(3, 3), 1.0);
    }

    #[test]
    fn test_translate_returns_same_matrix_for_chaining() {
        let mut m = create();
        m.translate(Vec3::new(1.0, 0.0, 0.0))
            .translate(Vec3::new(0.0, 1.0, 0.0));

        let returned: *const Mat4 = translate(&mut m, Vec3::new(0.0, 0.0, 1.0));
        assert!(std::ptr::eq(returned, &m));
        assert_eq!(m.translation(), Vec3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_cols_array_is_transposed() {
        let m = Mat4::new(std::array::from_fn(|i| i as f64));
        let cols = m.to_cols_array_2d();

        assert_eq!(cols[0], [0.0, 4.0, 8.0, 12.0]);
        assert_eq!(cols[3], [3.0, 7.0, 11.0, 15.0]);
        assert_eq!(m.transpose().transpose(), m);
        assert_eq!(m.transpose().row(0), m.column(0));
    }

    #[test]
    fn test_from_slice_length() {
        let values: Vec<f64> = (0..16).map(f64::from).collect();
        let m = Mat4::try_from(values.as_slice()).unwrap();
        assert_eq!(m, Mat4::from_slice(&values));
        assert_eq!(m.as_slice(), values.as_slice());

        let result = Mat4::try_from(&values[..15]);
        assert!(matches!(result, Err(MatrixError::InvalidLength { len: 15 })));
    }

    #[test]
    #[should_panic(expected = "exactly 16 elements")]
    fn test_from_slice_panics_on_wrong_length() {
        Mat4::from_slice(&[1.0; 17]);
    }
}
