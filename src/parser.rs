use itertools::Itertools;
use nom::bytes::complete::{tag, take_till};
use nom::character::complete::{char, digit1};
use nom::combinator::{all_consuming, map_res};
use nom::multi::separated_list1;
use nom::sequence::preceded;
use nom::IResult;

use crate::error::{Result, VcfError};
use crate::record::GenotypeAllele;

pub(crate) fn strip_line_terminator(line: &str) -> &str {
    line.trim_end_matches(|c: char| c == '\n' || c == '\r')
}

/// Splits the `#CHROM` line (terminator already stripped) into column names.
pub(crate) fn column_names(line: &str) -> Result<Vec<String>> {
    fn columns(input: &str) -> IResult<&str, Vec<&str>> {
        all_consuming(preceded(
            tag("#"),
            separated_list1(char('\t'), take_till(|c: char| c == '\t')),
        ))(input)
    }
    let (_, names) = columns(line).map_err(|_| VcfError::MalformedHeader)?;
    Ok(names.into_iter().map(str::to_owned).collect_vec())
}

/// Decodes a GT value such as `0/1`, `1|2` or `1`.
///
/// The separator is `/` whenever one occurs, `|` otherwise; a value mixing
/// both does not split cleanly and is rejected. Missing alleles (`.`) must be
/// filtered out by the caller.
pub(crate) fn genotype(gt: &str) -> Result<Vec<GenotypeAllele>> {
    fn allele_indices(separator: char, input: &str) -> IResult<&str, Vec<usize>> {
        all_consuming(separated_list1(
            char(separator),
            map_res(digit1, |index: &str| index.parse::<usize>()),
        ))(input)
    }
    let (separator, phased) = if gt.contains('/') {
        ('/', false)
    } else {
        ('|', gt.contains('|'))
    };
    let (_, indices) =
        allele_indices(separator, gt).map_err(|_| VcfError::InvalidGenotype(gt.to_owned()))?;
    Ok(indices
        .into_iter()
        .map(|index| {
            if phased {
                GenotypeAllele::Phased(index)
            } else {
                GenotypeAllele::Unphased(index)
            }
        })
        .collect())
}
