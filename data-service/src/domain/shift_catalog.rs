use shared::ShiftCode;

/// One entry of the compiled-in shift catalog, served read-only so callers
/// can validate a code without hard-coding the set themselves.
pub struct ShiftCatalogEntry {
    pub code: ShiftCode,
    pub description: &'static str,
}

/// The assignable shift codes plus `Bü Dienst`, in a fixed, documented
/// order. This is compiled in, not a database table — see spec §6.
pub fn entries() -> &'static [ShiftCatalogEntry] {
    const ENTRIES: &[ShiftCatalogEntry] = &[
        ShiftCatalogEntry {
            code: ShiftCode::BDienst,
            description: "Early shift, primary morning coverage",
        },
        ShiftCatalogEntry {
            code: ShiftCode::CDienst,
            description: "Early shift",
        },
        ShiftCatalogEntry {
            code: ShiftCode::VsDienst,
            description: "Late shift, unique per day",
        },
        ShiftCatalogEntry {
            code: ShiftCode::SDienst,
            description: "Late shift",
        },
        ShiftCatalogEntry {
            code: ShiftCode::BsDienst,
            description: "Split shift, counts as both early and late",
        },
        ShiftCatalogEntry {
            code: ShiftCode::C4Dienst,
            description: "Split shift, counts as both early and late",
        },
        ShiftCatalogEntry {
            code: ShiftCode::BueDienst,
            description: "Office shift, Leitung only, weekdays only",
        },
    ];
    ENTRIES
}
