use crate::error::MatrixError;
use crate::math::{Vec3, to_radians};

/// A 4x4 matrix stored as 16 values in one flat, row-major array.
///
/// The element at flat index `4 * row + col` is row `row`, column `col`. Translation
/// therefore lives in the last column, at indices 3, 7 and 11, and points are
/// transformed as column vectors (`M * p`).
///
/// Shader languages read `mat4x4` uniforms column by column, so the data must be
/// transposed on its way to the GPU; [`Mat4::to_cols_array_2d`] does that.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat4 {
    pub data: [f64; 16],
}

/// Returns the identity matrix.
pub fn create() -> Mat4 {
    Mat4::identity()
}

/// Computes `first × second`.
///
/// Neither input is modified. The product is not commutative: the transform in
/// `second` is applied to a point before the one in `first`.
pub fn multiply(first: &Mat4, second: &Mat4) -> Mat4 {
    let mut result = Mat4::zero();

    for i in 0..4 {
        for j in 0..4 {
            for k in 0..4 {
                result.data[4 * i + j] += first.data[4 * i + k] * second.data[4 * k + j];
            }
        }
    }

    result
}

/// Builds a perspective projection and returns `projection × matrix`.
///
/// `fov_degrees` is the full vertical field of view. Eye-space depths `-near` and
/// `-far` land on clip-space `-1` and `1` after the divide by `w = -z`.
///
/// Nothing is validated. `far == near`, a zero aspect ratio or a field of view
/// outside `(0, 180)` give Infinity or NaN entries rather than an error; use
/// [`crate::math::try_perspective`] when the parameters come from outside.
pub fn perspective(
    matrix: &Mat4,
    fov_degrees: f64,
    aspect_ratio: f64,
    near: f64,
    far: f64,
) -> Mat4 {
    let x = (to_radians(fov_degrees) / 2.0).tan();
    let y = aspect_ratio * x;
    let depth = far - near;

    #[rustfmt::skip]
    let projection = Mat4::new([
        1.0 / y, 0.0,     0.0,                       0.0,
        0.0,     1.0 / x, 0.0,                       0.0,
        0.0,     0.0,     -((far + near) / depth),   -((2.0 * far * near) / depth),
        0.0,     0.0,     -1.0,                      0.0,
    ]);

    log::trace!(
        "Perspective: fov={}, aspect={}, near={}, far={}",
        fov_degrees,
        aspect_ratio,
        near,
        far
    );

    multiply(&projection, matrix)
}

/// Adds `offset` to the translation column of `matrix` and returns it.
///
/// This accumulates: translating twice by the same offset doubles it.
pub fn translate(matrix: &mut Mat4, offset: Vec3) -> &mut Mat4 {
    matrix.data[3] += offset.x;
    matrix.data[7] += offset.y;
    matrix.data[11] += offset.z;

    matrix
}

impl Mat4 {
    pub const fn new(data: [f64; 16]) -> Self {
        Self { data }
    }

    pub const fn identity() -> Self {
        #[rustfmt::skip]
        let data = [
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ];
        Self { data }
    }

    pub const fn zero() -> Self {
        Self { data: [0.0; 16] }
    }

    /// # Panics
    ///
    /// Panics if `values` does not hold exactly 16 elements.
    pub fn from_slice(values: &[f64]) -> Self {
        assert_eq!(
            values.len(),
            16,
            "a 4x4 matrix needs exactly 16 elements"
        );
        let mut data = [0.0; 16];
        data.copy_from_slice(values);
        Self { data }
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[4 * row + col]
    }

    pub fn row(&self, index: usize) -> [f64; 4] {
        let start = 4 * index;
        [
            self.data[start],
            self.data[start + 1],
            self.data[start + 2],
            self.data[start + 3],
        ]
    }

    pub fn column(&self, index: usize) -> [f64; 4] {
        [
            self.data[index],
            self.data[4 + index],
            self.data[8 + index],
            self.data[12 + index],
        ]
    }

    pub fn translation(&self) -> Vec3 {
        Vec3::new(self.data[3], self.data[7], self.data[11])
    }

    pub fn transpose(&self) -> Self {
        let mut result = Self::zero();
        for row in 0..4 {
            for col in 0..4 {
                result.data[4 * col + row] = self.data[4 * row + col];
            }
        }
        result
    }

    /// See [`translate`].
    pub fn translate(&mut self, offset: Vec3) -> &mut Self {
        translate(self, offset)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Column-major `f32` data, laid out the way a WGSL `mat4x4<f32>` uniform expects.
    pub fn to_cols_array_2d(&self) -> [[f32; 4]; 4] {
        let mut cols = [[0.0f32; 4]; 4];
        for (index, col) in cols.iter_mut().enumerate() {
            *col = self.column(index).map(|v| v as f32);
        }
        cols
    }

    /// Transforms `(point, 1)` and divides by the resulting `w` when it is non-zero.
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        let p = [point.x, point.y, point.z, 1.0];
        let dot = |row: [f64; 4]| row.iter().zip(p).map(|(m, v)| m * v).sum::<f64>();

        let x = dot(self.row(0));
        let y = dot(self.row(1));
        let z = dot(self.row(2));
        let w = dot(self.row(3));

        if w != 0.0 {
            Vec3::new(x / w, y / w, z / w)
        } else {
            Vec3::new(x, y, z)
        }
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl std::ops::Mul for Mat4 {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        multiply(&self, &other)
    }
}

impl std::ops::Mul<&Mat4> for &Mat4 {
    type Output = Mat4;

    fn mul(self, other: &Mat4) -> Mat4 {
        multiply(self, other)
    }
}

impl TryFrom<&[f64]> for Mat4 {
    type Error = MatrixError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        let data: [f64; 16] = values
            .try_into()
            .map_err(|_| MatrixError::InvalidLength { len: values.len() })?;
        Ok(Self { data })
    }
}
