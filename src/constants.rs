/// Constants used by the string hash seeder.
pub mod seeder {
    /// Initial hash state before the key length is mixed in.
    pub const INITIAL_STATE: u32 = 1_779_033_703;
    /// Multiplier applied per UTF-16 code unit while absorbing the key.
    pub const ABSORB_MULTIPLIER: u32 = 3_432_918_353;
    /// Left-rotation applied after each absorbed code unit.
    pub const ABSORB_ROTATION: u32 = 13;
    /// First finalizer multiplier.
    pub const MIX_MULTIPLIER_A: u32 = 2_246_822_507;
    /// Second finalizer multiplier.
    pub const MIX_MULTIPLIER_B: u32 = 3_266_489_909;
}

/// Constants used by the sfc32 state generator.
pub mod generator {
    /// Right shift mixed into the `a` word.
    pub const SHIFT_A: u32 = 9;
    /// Left shift used to scale the `b` word.
    pub const SHIFT_B: u32 = 3;
    /// Left rotation applied to the `c` word.
    pub const ROTATE_C: u32 = 21;
    /// Divisor mapping a 32-bit word onto [0, 1).
    pub const UNIT_SCALE: f64 = 4_294_967_296.0;
}

/// Constants used by the category catalog assembler.
pub mod selection {
    /// Context discriminator that selects every category.
    pub const ALL_CONTEXT: &str = "all";
    /// Seed-key segment used when sampling one category inside an "all" selection.
    pub const ALL_KEY_SEGMENT: &str = "all-";
    /// Seed-key segment used when sampling a single selected category.
    pub const CATEGORY_KEY_SEGMENT: &str = "tab-";
    /// Candidates drawn from every category in an "all" selection.
    pub const PER_CATEGORY_IN_ALL: usize = 2;
    /// Candidates requested from a single selected category.
    pub const SINGLE_CATEGORY_REQUEST: usize = 3;
    /// Floor on the single-category sample size when the pool allows it.
    pub const SINGLE_CATEGORY_MINIMUM: usize = 2;
}

/// Constants used by catalog loading and normalization.
pub mod catalog {
    /// Separator that replaces whitespace, `_` and `-` runs in category ids.
    pub const CATEGORY_SEPARATOR: char = '-';
    /// Origin label used for catalogs parsed from in-memory strings.
    pub const INLINE_ORIGIN: &str = "<inline>";
}
