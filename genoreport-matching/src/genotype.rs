use genoreport_core::models::Zygosity;

///
/// Classification of a genotype call against a reference/alternative pair.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenotypeCall {
    /// No-call, homozygous indel call, malformed string or foreign alleles.
    Unclassified,
    HomozygousRef,
    Heterozygous,
    HomozygousAlt,
}

impl GenotypeCall {
    /// -1 = unclassified, 0 = hom-ref, 1 = het, 2 = hom-alt
    pub fn code(&self) -> i8 {
        match self {
            GenotypeCall::Unclassified => -1,
            GenotypeCall::HomozygousRef => 0,
            GenotypeCall::Heterozygous => 1,
            GenotypeCall::HomozygousAlt => 2,
        }
    }

    /// The reportable zygosity; `None` unless at least one allele is non-reference.
    pub fn zygosity(&self) -> Option<Zygosity> {
        match self {
            GenotypeCall::Heterozygous => Some(Zygosity::Heterozygous),
            GenotypeCall::HomozygousAlt => Some(Zygosity::HomozygousAlt),
            _ => None,
        }
    }
}

///
/// Split a genotype call into its two alleles. Single-allele calls
/// (hemizygous X/Y/MT) count as homozygous.
///
pub fn allele_pair(genotype: &str) -> Option<(&str, &str)> {
    if !genotype.is_ascii() {
        return None;
    }
    match genotype.len() {
        1 => Some((genotype, genotype)),
        2 => Some((&genotype[..1], &genotype[1..])),
        _ => None,
    }
}

/// `II`, `DD` and `--` are no-calls for every purpose.
pub fn is_unreliable_call(genotype: &str) -> bool {
    matches!(genotype, "II" | "DD" | "--")
}

///
/// Classify `genotype` against the `ref_allele`/`alt_allele` pair.
///
/// Allele order in the call doesn't matter (`AG` == `GA`). `II`, `DD` and
/// `--` are never classified; `ID`/`DI` always count as heterozygous.
///
pub fn match_genotype(genotype: &str, ref_allele: &str, alt_allele: &str) -> GenotypeCall {
    if is_unreliable_call(genotype) {
        return GenotypeCall::Unclassified;
    }
    if matches!(genotype, "ID" | "DI") {
        return GenotypeCall::Heterozygous;
    }

    let Some((a, b)) = allele_pair(genotype) else {
        return GenotypeCall::Unclassified;
    };
    let is = |allele: &str, expected: &str| allele.eq_ignore_ascii_case(expected.trim());

    if is(a, ref_allele) && is(b, ref_allele) {
        GenotypeCall::HomozygousRef
    } else if is(a, alt_allele) && is(b, alt_allele) {
        GenotypeCall::HomozygousAlt
    } else if (is(a, ref_allele) && is(b, alt_allele)) || (is(a, alt_allele) && is(b, ref_allele)) {
        GenotypeCall::Heterozygous
    } else {
        GenotypeCall::Unclassified
    }
}

///
/// Complement every base of a genotype call (A<->T, C<->G). Anything else,
/// including `-`, `I` and `D`, is kept as is.
///
pub fn complement_genotype(genotype: &str) -> String {
    genotype
        .chars()
        .map(|c| match c {
            'A' => 'T',
            'T' => 'A',
            'C' => 'G',
            'G' => 'C',
            'a' => 't',
            't' => 'a',
            'c' => 'g',
            'g' => 'c',
            _ => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    const BASES: [&str; 4] = ["A", "C", "G", "T"];

    #[rstest]
    #[case("AA", GenotypeCall::HomozygousRef)]
    #[case("GG", GenotypeCall::HomozygousAlt)]
    #[case("AG", GenotypeCall::Heterozygous)]
    #[case("GA", GenotypeCall::Heterozygous)]
    #[case("AC", GenotypeCall::Unclassified)]
    #[case("CT", GenotypeCall::Unclassified)]
    #[case("ag", GenotypeCall::Heterozygous)]
    fn test_match_genotype(#[case] genotype: &str, #[case] expected: GenotypeCall) {
        assert_eq!(match_genotype(genotype, "A", "G"), expected);
    }

    #[rstest]
    #[case("II")]
    #[case("DD")]
    #[case("--")]
    fn test_unreliable_calls_are_unclassified(#[case] genotype: &str) {
        assert_eq!(match_genotype(genotype, "I", "D").code(), -1);
        assert_eq!(match_genotype(genotype, "A", "G").code(), -1);
    }

    #[rstest]
    #[case("ID")]
    #[case("DI")]
    fn test_indel_het_calls_are_variants(#[case] genotype: &str) {
        assert_eq!(match_genotype(genotype, "A", "G").code(), 1);
        assert_eq!(match_genotype(genotype, "", "").code(), 1);
    }

    #[rstest]
    #[case("A", GenotypeCall::HomozygousRef)]
    #[case("G", GenotypeCall::HomozygousAlt)]
    #[case("T", GenotypeCall::Unclassified)]
    fn test_hemizygous_call_is_duplicated(#[case] genotype: &str, #[case] expected: GenotypeCall) {
        assert_eq!(match_genotype(genotype, "A", "G"), expected);
    }

    #[rstest]
    #[case("")]
    #[case("AGT")]
    #[case("AÄ")]
    fn test_wrong_length_is_unclassified(#[case] genotype: &str) {
        assert_eq!(match_genotype(genotype, "A", "G"), GenotypeCall::Unclassified);
    }

    #[rstest]
    fn test_multi_base_alleles_never_match_snp_calls() {
        assert_eq!(match_genotype("AA", "AT", "A"), GenotypeCall::HomozygousAlt);
        assert_eq!(match_genotype("TT", "AT", "A"), GenotypeCall::Unclassified);
    }

    #[rstest]
    fn test_symmetric_under_swap_for_all_pairs() {
        for r in BASES {
            for alt in BASES.iter().filter(|b| **b != r) {
                for x in BASES {
                    for y in BASES {
                        let forward = format!("{}{}", x, y);
                        let reverse = format!("{}{}", y, x);
                        assert_eq!(
                            match_genotype(&forward, r, alt),
                            match_genotype(&reverse, r, alt)
                        );
                    }
                }
                assert_eq!(match_genotype(&format!("{}{}", r, r), r, alt).code(), 0);
                assert_eq!(match_genotype(&format!("{}{}", alt, alt), r, alt).code(), 2);
                assert_eq!(match_genotype(&format!("{}{}", r, alt), r, alt).code(), 1);
                assert_eq!(match_genotype(&format!("{}{}", alt, r), r, alt).code(), 1);
            }
        }
    }

    #[rstest]
    fn test_zygosity_only_for_carriers() {
        assert_eq!(GenotypeCall::HomozygousRef.zygosity(), None);
        assert_eq!(GenotypeCall::Unclassified.zygosity(), None);
        assert_eq!(
            GenotypeCall::HomozygousAlt.zygosity(),
            Some(Zygosity::HomozygousAlt)
        );
    }

    #[rstest]
    #[case("CC", "GG")]
    #[case("AG", "TC")]
    #[case("--", "--")]
    #[case("DI", "DI")]
    #[case("t", "a")]
    fn test_complement_genotype(#[case] genotype: &str, #[case] expected: &str) {
        assert_eq!(complement_genotype(genotype), expected);
    }

    #[rstest]
    fn test_allele_pair() {
        assert_eq!(allele_pair("AG"), Some(("A", "G")));
        assert_eq!(allele_pair("A"), Some(("A", "A")));
        assert_eq!(allele_pair("AGT"), None);
    }
}
