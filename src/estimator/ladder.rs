//! 阈值阶梯
//!
//! 按顺序逐级比较，第一个满足条件的阶梯生效，全部不满足时返回兜底值。
//! 名次分档、竞争程度、百分位区间、类别推荐都使用同一套查找逻辑。

/// 阶梯的比较方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// value <= bound
    AtMost,
    /// value >= bound
    AtLeast,
}

impl Comparison {
    fn admits<B: PartialOrd>(self, value: &B, bound: &B) -> bool {
        match self {
            Comparison::AtMost => value <= bound,
            Comparison::AtLeast => value >= bound,
        }
    }
}

/// 有序阈值表
#[derive(Debug)]
pub struct Ladder<B: 'static, T: 'static> {
    comparison: Comparison,
    steps: &'static [(B, T)],
    fallback: T,
}

impl<B: 'static, T: 'static> Ladder<B, T> {
    pub const fn new(comparison: Comparison, steps: &'static [(B, T)], fallback: T) -> Self {
        Self {
            comparison,
            steps,
            fallback,
        }
    }

    pub fn steps(&self) -> &'static [(B, T)] {
        self.steps
    }

    pub fn fallback(&self) -> &T {
        &self.fallback
    }
}

impl<B: PartialOrd + 'static, T: 'static> Ladder<B, T> {
    /// 查找第一个满足条件的阶梯
    ///
    /// # 返回
    /// 未命中任何阶梯时返回 `None`
    pub fn find(&self, value: B) -> Option<&T> {
        self.steps
            .iter()
            .find(|(bound, _)| self.comparison.admits(&value, bound))
            .map(|(_, item)| item)
    }

    /// 查找第一个满足条件的阶梯，未命中时返回兜底值
    pub fn lookup(&self, value: B) -> &T {
        self.find(value).unwrap_or_else(|| self.fallback())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static AT_MOST: Ladder<u32, &str> =
        Ladder::new(Comparison::AtMost, &[(10, "small"), (100, "medium")], "large");

    static AT_LEAST: Ladder<f64, &str> =
        Ladder::new(Comparison::AtLeast, &[(90.0, "high"), (50.0, "mid")], "low");

    #[test]
    fn test_at_most_first_match_wins() {
        assert_eq!(*AT_MOST.lookup(0), "small");
        assert_eq!(*AT_MOST.lookup(10), "small");
        assert_eq!(*AT_MOST.lookup(11), "medium");
        assert_eq!(*AT_MOST.lookup(100), "medium");
        assert_eq!(*AT_MOST.lookup(101), "large");
        assert!(AT_MOST.find(101).is_none());
    }

    #[test]
    fn test_at_least_first_match_wins() {
        assert_eq!(*AT_LEAST.lookup(99.0), "high");
        assert_eq!(*AT_LEAST.lookup(90.0), "high");
        assert_eq!(*AT_LEAST.lookup(89.99), "mid");
        assert_eq!(*AT_LEAST.lookup(10.0), "low");
    }

    #[test]
    fn test_nan_falls_through() {
        assert_eq!(*AT_LEAST.lookup(f64::NAN), "low");
    }
}
