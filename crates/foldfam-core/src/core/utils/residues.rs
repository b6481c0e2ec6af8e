use phf::phf_map;

/// Three-letter to one-letter residue codes, including the common
/// non-standard names seen in deposited structures.
static THREE_TO_ONE: phf::Map<&'static str, char> = phf_map! {
    "ALA" => 'A',
    "ARG" => 'R',
    "ASN" => 'N',
    "ASP" => 'D',
    "CYS" => 'C',
    "GLN" => 'Q',
    "GLU" => 'E',
    "GLY" => 'G',
    "HIS" => 'H',
    "ILE" => 'I',
    "LEU" => 'L',
    "LYS" => 'K',
    "MET" => 'M',
    "PHE" => 'F',
    "PRO" => 'P',
    "SER" => 'S',
    "THR" => 'T',
    "TRP" => 'W',
    "TYR" => 'Y',
    "VAL" => 'V',
    "MSE" => 'M',
    "SEC" => 'U',
    "PYL" => 'O',
};

pub fn one_letter_code(residue_name: &str) -> Option<char> {
    THREE_TO_ONE.get(residue_name.trim()).copied()
}

/// Derives a one-letter sequence from residue names; unknown names map to `X`.
pub fn one_letter_sequence<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    names
        .into_iter()
        .map(|name| one_letter_code(name).unwrap_or('X'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_codes_resolve() {
        assert_eq!(one_letter_code("ALA"), Some('A'));
        assert_eq!(one_letter_code("TRP"), Some('W'));
        assert_eq!(one_letter_code(" GLY "), Some('G'));
    }

    #[test]
    fn selenomethionine_maps_to_m() {
        assert_eq!(one_letter_code("MSE"), Some('M'));
    }

    #[test]
    fn unknown_names_become_x_in_sequences() {
        assert_eq!(one_letter_sequence(["ALA", "FOO", "SER"]), "AXS");
    }
}
