use super::{Quantity, SIUnit};
use approx::{AbsDiffEq, RelativeEq};
use ndarray::{Array1, ArrayBase, Data, Ix1};
use std::ops::{Div, Mul, Neg};

impl Mul for SIUnit {
    type Output = SIUnit;
    fn mul(self, other: SIUnit) -> SIUnit {
        let mut e = self.0;
        e.iter_mut().zip(other.0).for_each(|(a, b)| *a += b);
        SIUnit(e)
    }
}

impl Div for SIUnit {
    type Output = SIUnit;
    fn div(self, other: SIUnit) -> SIUnit {
        self * other.inv()
    }
}

/// Multiplication
impl Mul for Quantity<f64> {
    type Output = Quantity<f64>;
    fn mul(self, other: Quantity<f64>) -> Self::Output {
        Quantity::new(self.value * other.value, self.unit * other.unit)
    }
}

impl Mul<f64> for Quantity<f64> {
    type Output = Quantity<f64>;
    fn mul(self, other: f64) -> Self::Output {
        Quantity::new(self.value * other, self.unit)
    }
}

impl Mul<Quantity<f64>> for f64 {
    type Output = Quantity<f64>;
    fn mul(self, other: Quantity<f64>) -> Self::Output {
        Quantity::new(self * other.value, other.unit)
    }
}

impl Mul<Quantity<f64>> for Quantity<Array1<f64>> {
    type Output = Quantity<Array1<f64>>;
    fn mul(self, other: Quantity<f64>) -> Self::Output {
        Quantity::new(self.value * other.value, self.unit * other.unit)
    }
}

impl Mul<Quantity<f64>> for Array1<f64> {
    type Output = Quantity<Array1<f64>>;
    fn mul(self, other: Quantity<f64>) -> Self::Output {
        Quantity::new(self * other.value, other.unit)
    }
}

impl<S: Data<Elem = f64>> Mul<Quantity<f64>> for &ArrayBase<S, Ix1> {
    type Output = Quantity<Array1<f64>>;
    fn mul(self, other: Quantity<f64>) -> Self::Output {
        Quantity::new(self * other.value, other.unit)
    }
}

/// Division
impl Div for Quantity<f64> {
    type Output = Quantity<f64>;
    fn div(self, other: Quantity<f64>) -> Self::Output {
        Quantity::new(self.value / other.value, self.unit / other.unit)
    }
}

impl Div<f64> for Quantity<f64> {
    type Output = Quantity<f64>;
    fn div(self, other: f64) -> Self::Output {
        Quantity::new(self.value / other, self.unit)
    }
}

impl Div<Quantity<f64>> for f64 {
    type Output = Quantity<f64>;
    fn div(self, other: Quantity<f64>) -> Self::Output {
        Quantity::new(self / other.value, other.unit.inv())
    }
}

impl Div<Quantity<f64>> for Quantity<Array1<f64>> {
    type Output = Quantity<Array1<f64>>;
    fn div(self, other: Quantity<f64>) -> Self::Output {
        Quantity::new(self.value / other.value, self.unit / other.unit)
    }
}

impl Neg for Quantity<f64> {
    type Output = Quantity<f64>;
    fn neg(self) -> Self::Output {
        Quantity::new(-self.value, self.unit)
    }
}

/// Comparisons between quantities of different units always fail.
impl PartialOrd for Quantity<f64> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        if self.unit == other.unit {
            self.value.partial_cmp(&other.value)
        } else {
            None
        }
    }
}

impl AbsDiffEq for Quantity<f64> {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.unit == other.unit && self.value.abs_diff_eq(&other.value, epsilon)
    }
}

impl RelativeEq for Quantity<f64> {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.unit == other.unit && self.value.relative_eq(&other.value, epsilon, max_relative)
    }
}
