use bitflags::bitflags;

bitflags! {
    /// Misc flags attached to a variable.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
    pub struct FlagVar: u8 {
        /// the previously assigned value of a Var.
        const PHASE   = 0b0000_0001;
        /// a var is checked during the current conflict analysis.
        const CA_SEEN = 0b0000_0010;
    }
}
