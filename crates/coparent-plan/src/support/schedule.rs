/// Share of combined income set aside as base support, keyed by child count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChildMultiplier(f64);

impl ChildMultiplier {
    pub const ONE_CHILD: Self = Self(0.16);
    pub const TWO_CHILDREN: Self = Self(0.22);
    pub const THREE_CHILDREN: Self = Self(0.26);
    /// Applies to every count outside the table, zero and four or more included.
    pub const DEFAULT: Self = Self(0.30);

    pub const fn for_children(num_children: u32) -> Self {
        match num_children {
            1 => Self::ONE_CHILD,
            2 => Self::TWO_CHILDREN,
            3 => Self::THREE_CHILDREN,
            _ => Self::DEFAULT,
        }
    }

    pub const fn value(self) -> f64 {
        self.0
    }

    pub fn apply(self, combined_income: f64) -> f64 {
        combined_income * self.0
    }
}
