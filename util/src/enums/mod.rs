//! Flag decomposition and human-readable labels for flag enums
//!
//! A flag enum is a `Copy` newtype over an unsigned integer whose named members are listed in an
//! explicit registration table (see [FlagEnum::members]). Each member may declare a display
//! label; the label is either literal text or a key into a [ResourceTable]. The [flag_enum!]
//! macro generates the newtype and its table.
//!
//! # Examples
//!
//! ```rust
//! use roonia_util::enums::{get_description, get_flags};
//! use roonia_util::flag_enum;
//!
//! flag_enum! {
//!     /// File access rights
//!     pub struct Access(u8) {
//!         NONE = 0 => label("No access"),
//!         READ = 1 => label("Read"),
//!         WRITE = 2,
//!         EXECUTE = 4 => label("Execute"),
//!     }
//! }
//!
//! let rx = Access::READ | Access::EXECUTE;
//! assert_eq!(get_flags(rx), [Access::READ, Access::EXECUTE]);
//! assert_eq!(get_description(rx), "Read, Execute");
//! assert_eq!(get_description(Access::WRITE), "WRITE");
//! assert_eq!(get_description(Access::NONE), "No access");
//! ```

use std::cmp::Reverse;
use std::collections::BTreeMap;

mod resources;

pub use resources::{NoResources, ResourceTable, StaticResources};

/// Display label declared for an enum member
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    /// Literal label text
    Text(&'static str),
    /// Key into a [ResourceTable]; the key itself is used when the table has no entry
    Resource(&'static str),
}

/// One entry of a flag enum's registration table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Member<E> {
    /// Symbolic name of the member
    pub name: &'static str,
    /// The member's value
    pub value: E,
    /// Declared display label, if any
    pub label: Option<Label>,
}

impl<E> Member<E> {
    /// Creates a registration table entry
    pub const fn new(name: &'static str, value: E, label: Option<Label>) -> Self {
        Self { name, value, label }
    }

    /// Resolves the human-readable label of this member
    ///
    /// Precedence: literal label, then the resource table entry for a resource key (falling back
    /// to the key itself), then the symbolic name.
    pub fn resolve_label<R: ResourceTable + ?Sized>(&self, resources: &R) -> String {
        match self.label {
            Some(Label::Text(text)) => text.to_owned(),
            Some(Label::Resource(key)) => resources.lookup(key).unwrap_or(key).to_owned(),
            None => self.name.to_owned(),
        }
    }
}

/// A bit-flag enum with an explicit member registration table
pub trait FlagEnum: Copy + 'static {
    /// The raw bit pattern of this value
    fn bits(&self) -> u64;

    /// Every declared member, in declaration order
    fn members() -> &'static [Member<Self>];

    /// The member whose value is exactly this value, if any
    fn member(&self) -> Option<&'static Member<Self>> {
        let bits = self.bits();
        Self::members().iter().find(|m| m.value.bits() == bits)
    }

    /// Raw symbolic representation: the member name on an exact match, else the decimal bits
    fn symbolic_name(&self) -> String {
        self.member()
            .map_or_else(|| self.bits().to_string(), |m| m.name.to_owned())
    }
}

/// Decomposes `value` into registered members, ascending by value
///
/// Among members sharing a value the first declared one is used, matching [FlagEnum::member].
fn decompose<E: FlagEnum>(value: E) -> Vec<&'static Member<E>> {
    let bits = value.bits();
    if bits == 0 {
        return E::members()
            .iter()
            .find(|m| m.value.bits() == 0)
            .into_iter()
            .collect();
    }

    // descending by value; the stable sort keeps declaration order among ties
    let mut candidates: Vec<&'static Member<E>> = E::members().iter().collect();
    candidates.sort_by_key(|m| Reverse(m.value.bits()));

    let mut residue = bits;
    let mut flags = Vec::new();
    for member in candidates {
        let mask = member.value.bits();
        if mask != 0 && residue & mask == mask {
            flags.push(member);
            residue -= mask;
        }
    }

    if residue != 0 {
        log::debug!("flag value {bits:#x} leaves unknown bits {residue:#x}");
        return Vec::new();
    }

    flags.reverse();
    flags
}

/// Decomposes a flag value into its named component flags, ascending by value
///
/// Members are tried from the largest value to the smallest; a member whose bits are all still
/// present in the residue is taken and its bits removed. If bits remain that no member covers, the
/// value does not decompose and the result is empty. Zero decomposes into the zero-valued member
/// if one is declared.
///
/// # Examples
///
/// ```rust
/// use roonia_util::enums::get_flags;
/// use roonia_util::flag_enum;
///
/// flag_enum! {
///     pub struct Bits(u32) { NONE = 0, A = 1, B = 2, C = 4 }
/// }
///
/// assert_eq!(get_flags(Bits(5)), [Bits::A, Bits::C]);
/// assert_eq!(get_flags(Bits(0)), [Bits::NONE]);
/// assert!(get_flags(Bits(8)).is_empty());
/// ```
pub fn get_flags<E: FlagEnum>(value: E) -> Vec<E> {
    decompose(value).into_iter().map(|m| m.value).collect()
}

/// [get_description_with] without a resource table
pub fn get_description<E: FlagEnum>(value: E) -> String {
    get_description_with(value, &NoResources)
}

/// Joins the resolved labels of every component flag of `value` with `", "`
///
/// Falls back to [FlagEnum::symbolic_name] when `value` does not decompose.
pub fn get_description_with<E, R>(value: E, resources: &R) -> String
where
    E: FlagEnum,
    R: ResourceTable + ?Sized,
{
    let labels: Vec<String> = decompose(value)
        .into_iter()
        .map(|m| m.resolve_label(resources))
        .collect();

    match labels.is_empty() {
        true => value.symbolic_name(),
        false => labels.join(", "),
    }
}

/// [get_descriptions_with] without a resource table
pub fn get_descriptions<E: FlagEnum>() -> BTreeMap<u64, String> {
    get_descriptions_with::<E, _>(&NoResources)
}

/// Maps the value of every declared member of `E` to its resolved label
///
/// When several members share a value, the first declared one wins.
pub fn get_descriptions_with<E, R>(resources: &R) -> BTreeMap<u64, String>
where
    E: FlagEnum,
    R: ResourceTable + ?Sized,
{
    let mut descriptions = BTreeMap::new();
    for member in E::members() {
        descriptions
            .entry(member.value.bits())
            .or_insert_with(|| member.resolve_label(resources));
    }
    descriptions
}

#[macro_export]
/// Declares a flag enum newtype together with its [FlagEnum](crate::enums::FlagEnum)
/// registration table
///
/// Each member is `NAME = value`, optionally followed by `=> label("text")` or
/// `=> resource("key")`. The generated type derives `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`
/// and `Debug`, and supports `|`, `&` and `^`.
///
/// The representation must be at most 64 bits wide; wider types are rejected at compile time:
///
/// ```compile_fail
/// roonia_util::flag_enum! {
///     pub struct Wide(u128) { TOP = 1 << 100 }
/// }
/// ```
///
/// # Examples
///
/// ```rust
/// use roonia_util::enums::{get_descriptions, FlagEnum};
/// use roonia_util::flag_enum;
///
/// flag_enum! {
///     pub struct Weekend(u8) {
///         SATURDAY = 1 => label("Sat"),
///         SUNDAY = 2 => resource("day.sunday"),
///     }
/// }
///
/// assert_eq!((Weekend::SATURDAY | Weekend::SUNDAY).bits(), 3);
/// let all = get_descriptions::<Weekend>();
/// assert_eq!(all[&1], "Sat");
/// assert_eq!(all[&2], "day.sunday");
/// ```
macro_rules! flag_enum {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident($repr:ty) {
            $( $member:ident = $value:expr $(=> $kind:ident($label:literal))? ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis struct $name(pub $repr);

        const _: () = assert!(
            ::core::mem::size_of::<$repr>() <= 8,
            "flag_enum! representations must be at most 64 bits wide"
        );

        #[allow(non_upper_case_globals)]
        impl $name {
            $( pub const $member: Self = Self($value); )*
        }

        impl $crate::enums::FlagEnum for $name {
            fn bits(&self) -> u64 {
                self.0 as u64
            }

            fn members() -> &'static [$crate::enums::Member<Self>] {
                const MEMBERS: &[$crate::enums::Member<$name>] = &[
                    $(
                        $crate::enums::Member::new(
                            stringify!($member),
                            $name($value),
                            $crate::flag_label!($($kind($label))?),
                        ),
                    )*
                ];
                MEMBERS
            }
        }

        impl ::std::ops::BitOr for $name {
            type Output = Self;
            fn bitor(self, rhs: Self) -> Self {
                Self(self.0 | rhs.0)
            }
        }

        impl ::std::ops::BitAnd for $name {
            type Output = Self;
            fn bitand(self, rhs: Self) -> Self {
                Self(self.0 & rhs.0)
            }
        }

        impl ::std::ops::BitXor for $name {
            type Output = Self;
            fn bitxor(self, rhs: Self) -> Self {
                Self(self.0 ^ rhs.0)
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! flag_label {
    () => {
        ::core::option::Option::None
    };
    (label($text:literal)) => {
        ::core::option::Option::Some($crate::enums::Label::Text($text))
    };
    (resource($key:literal)) => {
        ::core::option::Option::Some($crate::enums::Label::Resource($key))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    crate::flag_enum! {
        struct Abc(u32) {
            NONE = 0,
            A = 1,
            B = 2,
            C = 4 => label("Charlie"),
        }
    }

    crate::flag_enum! {
        struct NoZero(u16) {
            LOW = 1,
            HIGH = 0x100 => resource("bits.high"),
        }
    }

    crate::flag_enum! {
        struct Combined(u8) {
            READ = 1 => label("Read"),
            WRITE = 2,
            READ_WRITE = 3 => label("Read/Write"),
            ALSO_READ = 1 => label("Also read"),
        }
    }

    #[test]
    fn decomposition_examples() {
        assert_eq!(get_flags(Abc(5)), [Abc::A, Abc::C]);
        assert_eq!(get_flags(Abc(0)), [Abc::NONE]);
        assert_eq!(get_flags(Abc(3)), [Abc::A, Abc::B]);
        assert!(get_flags(Abc(8)).is_empty());
        assert!(get_flags(Abc(9)).is_empty());
    }

    #[test]
    fn zero_without_zero_member_is_empty() {
        assert!(get_flags(NoZero(0)).is_empty());
        assert_eq!(get_description(NoZero(0)), "0");
    }

    #[test]
    fn composite_members_are_preferred() {
        assert_eq!(get_flags(Combined(3)), [Combined::READ_WRITE]);
        assert_eq!(get_description(Combined(3)), "Read/Write");
    }

    #[test]
    fn descriptions_join_labels() {
        assert_eq!(get_description(Abc::A | Abc::C), "A, Charlie");
        assert_eq!(get_description(Abc::NONE), "NONE");
        assert_eq!(get_description(Abc(8)), "8");
    }

    #[test]
    fn resource_labels_resolve_through_the_table() {
        let table: HashMap<String, String> =
            [("bits.high".to_owned(), "High byte".to_owned())].into();
        assert_eq!(
            get_description_with(NoZero::LOW | NoZero::HIGH, &table),
            "LOW, High byte"
        );
        assert_eq!(get_description(NoZero::HIGH), "bits.high");
    }

    #[test]
    fn descriptions_cover_all_members() {
        let all = get_descriptions::<Abc>();
        assert_eq!(all.len(), 4);
        assert_eq!(all[&0], "NONE");
        assert_eq!(all[&4], "Charlie");
    }

    #[test]
    fn duplicate_values_keep_first_declared() {
        let all = get_descriptions::<Combined>();
        assert_eq!(all.len(), 3);
        assert_eq!(all[&1], "Read");
    }

    #[test]
    fn shared_values_resolve_to_first_declared_everywhere() {
        assert_eq!(get_description(Combined::READ), "Read");
        assert_eq!(get_description(Combined::ALSO_READ), "Read");
        assert_eq!(Combined::ALSO_READ.symbolic_name(), "READ");
        assert_eq!(get_flags(Combined::READ), [Combined::READ]);
        assert_eq!(
            get_description(Combined::READ | Combined::WRITE),
            get_description(Combined::READ_WRITE)
        );

        let resolved = decompose(Combined::ALSO_READ);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].name, "READ");
        assert_eq!(resolved[0], Combined::READ.member().unwrap());
    }

    #[test]
    fn shared_values_in_composites_use_first_declared() {
        crate::flag_enum! {
            struct Aliased(u8) {
                LOW = 1 => label("Low"),
                LOW_ALIAS = 1 => label("Alias"),
                HIGH = 4,
            }
        }
        assert_eq!(get_description(Aliased::LOW_ALIAS | Aliased::HIGH), "Low, HIGH");
        assert_eq!(get_descriptions::<Aliased>()[&1], "Low");
    }

    #[test]
    fn symbolic_name_falls_back_to_bits() {
        assert_eq!(Abc::B.symbolic_name(), "B");
        assert_eq!(Abc(6).symbolic_name(), "6");
    }
}
