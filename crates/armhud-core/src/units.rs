//! 强类型角度单位
//!
//! 使用 NewType 模式防止角度与弧度混用。遥测总线上的关节角以角度（degree）
//! 发布，三角函数计算使用弧度，两者在类型层面隔离。
//!
//! # 示例
//!
//! ```rust
//! use armhud_core::units::{Deg, Rad};
//!
//! let d = Deg(90.0);
//! let r = d.to_rad();
//! assert!((r.0 - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
//! ```

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// 角度（NewType）
///
/// 关节角与基座旋转偏移的公开表示。取值不受限制，任意实数均合法，
/// 三角函数天然完成周期回绕。
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Deg(pub f64);

impl Deg {
    /// 零角度常量
    pub const ZERO: Self = Deg(0.0);

    #[inline]
    pub const fn new(value: f64) -> Self {
        Deg(value)
    }

    /// 转换为弧度
    #[inline]
    pub fn to_rad(self) -> Rad {
        Rad(self.0.to_radians())
    }

    /// 获取原始值
    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Deg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°", self.0)
    }
}

impl Add for Deg {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Deg(self.0 + rhs.0)
    }
}

impl AddAssign for Deg {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Deg {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Deg(self.0 - rhs.0)
    }
}

impl Mul<f64> for Deg {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Deg(self.0 * rhs)
    }
}

impl Neg for Deg {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Deg(-self.0)
    }
}

impl From<f64> for Deg {
    #[inline]
    fn from(value: f64) -> Self {
        Deg(value)
    }
}

/// 弧度（NewType）
///
/// 仅在运动学折叠内部使用，外部接口统一为 [`Deg`]。
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Rad(pub f64);

impl Rad {
    /// 零弧度常量
    pub const ZERO: Self = Rad(0.0);

    #[inline]
    pub const fn new(value: f64) -> Self {
        Rad(value)
    }

    /// 转换为角度
    #[inline]
    pub fn to_deg(self) -> Deg {
        Deg(self.0.to_degrees())
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn sin(self) -> f64 {
        self.0.sin()
    }

    #[inline]
    pub fn cos(self) -> f64 {
        self.0.cos()
    }
}

impl fmt::Display for Rad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4} rad", self.0)
    }
}

impl Add for Rad {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Rad(self.0 + rhs.0)
    }
}

impl Sub for Rad {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Rad(self.0 - rhs.0)
    }
}

impl Mul<f64> for Rad {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Rad(self.0 * rhs)
    }
}

impl Neg for Rad {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Rad(-self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 测试角度与弧度的往返转换
    #[test]
    fn deg_rad_roundtrip() {
        let d = Deg(123.4);
        let back = d.to_rad().to_deg();
        assert!((d.0 - back.0).abs() < 1e-10);
    }

    /// 测试运算符重载
    #[test]
    fn deg_arithmetic() {
        assert_eq!(Deg(10.0) + Deg(20.0), Deg(30.0));
        assert_eq!(Deg(10.0) - Deg(20.0), Deg(-10.0));
        assert_eq!(Deg(10.0) * 2.0, Deg(20.0));
        assert_eq!(-Deg(10.0), Deg(-10.0));
    }

    /// 测试弧度三角函数
    #[test]
    fn rad_trig() {
        let r = Deg(-90.0).to_rad();
        assert!(r.cos().abs() < 1e-12);
        assert!((r.sin() + 1.0).abs() < 1e-12);
    }
}
