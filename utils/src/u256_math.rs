use soroban_sdk::{Env, U256};

pub trait ExtraMath {
    fn sqrt(&self) -> Self;
}

impl ExtraMath for U256 {
    // Floor square root by Newton iteration seeded at y / 2 + 1.
    // Small inputs are answered directly: the iteration is only monotone for y > 3.
    fn sqrt(&self) -> U256 {
        let e = self.env();
        let zero = U256::from_u32(e, 0);
        let one = U256::from_u32(e, 1);
        let two = U256::from_u32(e, 2);
        let three = U256::from_u32(e, 3);

        if self > &three {
            let mut z = self.clone();
            let mut x = self.div(&two).add(&one);
            while x < z {
                z = x.clone();
                x = self.div(&x).add(&x).div(&two);
            }
            z
        } else if self != &zero {
            one
        } else {
            zero
        }
    }
}

// floor(x * y / denominator) with a 256-bit intermediate product.
// None when denominator is zero or the quotient does not fit into u128.
pub fn mul_div_floor(e: &Env, x: u128, y: u128, denominator: u128) -> Option<u128> {
    if denominator == 0 {
        return None;
    }
    U256::from_u128(e, x)
        .mul(&U256::from_u128(e, y))
        .div(&U256::from_u128(e, denominator))
        .to_u128()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sqrt_u128(e: &Env, value: u128) -> u128 {
        U256::from_u128(e, value).sqrt().to_u128().unwrap()
    }

    #[test]
    fn test_sqrt_small_values() {
        let e = Env::default();
        assert_eq!(sqrt_u128(&e, 0), 0);
        assert_eq!(sqrt_u128(&e, 1), 1);
        assert_eq!(sqrt_u128(&e, 2), 1);
        assert_eq!(sqrt_u128(&e, 3), 1);
        assert_eq!(sqrt_u128(&e, 4), 2);
        assert_eq!(sqrt_u128(&e, 8), 2);
        assert_eq!(sqrt_u128(&e, 9), 3);
    }

    #[test]
    fn test_sqrt_floors() {
        let e = Env::default();
        assert_eq!(sqrt_u128(&e, 10000), 100);
        assert_eq!(sqrt_u128(&e, 10001), 100);
        assert_eq!(sqrt_u128(&e, 20000), 141);
        assert_eq!(sqrt_u128(&e, 99), 9);
        assert_eq!(sqrt_u128(&e, 101), 10);
    }

    #[test]
    fn test_sqrt_of_max_product() {
        let e = Env::default();
        let max = U256::from_u128(&e, u128::MAX);
        let product = max.mul(&max);
        assert_eq!(product.sqrt().to_u128(), Some(u128::MAX));
    }

    #[test]
    fn test_mul_div_floor() {
        let e = Env::default();
        assert_eq!(mul_div_floor(&e, 50, 100, 100), Some(50));
        assert_eq!(mul_div_floor(&e, 10, 10, 3), Some(33));
        assert_eq!(mul_div_floor(&e, u128::MAX, u128::MAX, u128::MAX), Some(u128::MAX));
        assert_eq!(mul_div_floor(&e, u128::MAX, 2, 1), None);
        assert_eq!(mul_div_floor(&e, 1, 1, 0), None);
    }
}
