mod cleaning;
mod config;
mod labels;
pub mod manual;

use log::{debug, info, warn};

use std::collections::{BTreeMap, HashMap};

pub use crate::cleaning::{build_one_hot_column, clean_labels, clean_values};
pub use crate::config::*;
pub use crate::labels::parse_variable_labels;

/// The labels of a column, in order of first appearance of each value.
#[derive(PartialEq, Debug, Clone, Default)]
pub struct ValueLabels {
    entries: Vec<(Code, String)>,
}

impl ValueLabels {
    pub fn get(&self, code: Code) -> Option<&str> {
        self.entries
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, l)| l.as_str())
    }

    pub fn codes(&self) -> impl Iterator<Item = Code> + '_ {
        self.entries.iter().map(|(c, _)| *c)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Code, String)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// The distinct elements of a column, in order of first appearance.
fn distinct_in_order<T: PartialEq + Clone>(column: &[T]) -> Vec<T> {
    let mut res: Vec<T> = Vec::new();
    for x in column {
        if !res.contains(x) {
            res.push(x.clone());
        }
    }
    res
}

/// A survey: the responses of each respondent, both as numerical codes and
/// as text, along with the weight of each respondent.
///
/// Invariant: the values and the labels always have the same rows and columns.
#[derive(PartialEq, Debug, Clone)]
pub struct SurveyDataset {
    values: Table<Code>,
    labels: Table<String>,
    weights: Vec<f64>,
    total_weight: f64,
    // Kept to build the subsets.
    variables: String,
    column_labels: HashMap<String, String>,
    value_labels: BTreeMap<String, ValueLabels>,
}

impl SurveyDataset {
    /// Builds a survey from the raw exports.
    ///
    /// Arguments:
    /// * `values` the responses as numerical codes (`SAVE TRANSLATE ... /TYPE=CSV /FIELDNAMES.`)
    /// * `labels` the same responses as text (`... /CELLS=LABELS.`)
    /// * `variables` the output of `DISPLAY LABELS.`
    pub fn new(
        values: &RawTable,
        labels: &RawTable,
        variables: &str,
    ) -> Result<SurveyDataset, DataError> {
        let values = clean_values(values)?;
        let labels = clean_labels(labels);
        SurveyDataset::from_tables(values, labels, variables)
    }

    fn from_tables(
        values: Table<Code>,
        labels: Table<String>,
        variables: &str,
    ) -> Result<SurveyDataset, DataError> {
        if values.names != labels.names {
            return Err(DataError::ColumnMismatch {
                values: values.names,
                labels: labels.names,
            });
        }
        if values.num_rows() != labels.num_rows() {
            return Err(DataError::RowCountMismatch {
                values: values.num_rows(),
                labels: labels.num_rows(),
            });
        }
        let column_labels = parse_variable_labels(variables)?;
        let mut survey = SurveyDataset {
            values,
            labels,
            weights: Vec::new(),
            total_weight: 0.0,
            variables: variables.to_string(),
            column_labels,
            value_labels: BTreeMap::new(),
        };
        survey.add_weights_column();
        survey.value_labels = survey.column_value_label_map()?;
        info!(
            "SurveyDataset: {} rows, {} columns, total weight {}",
            survey.num_rows(),
            survey.values.num_columns(),
            survey.total_weight
        );
        Ok(survey)
    }

    /// Gives every respondent a weight of one.
    fn add_weights_column(&mut self) {
        self.weights = vec![1.0; self.values.num_rows()];
        self.column_labels
            .insert(WEIGHTS_COLUMN.to_string(), WEIGHTS_COLUMN.to_string());
        self.update_total_weight();
    }

    fn update_total_weight(&mut self) {
        self.total_weight = self.weights.iter().sum();
    }

    pub fn num_rows(&self) -> usize {
        self.values.num_rows()
    }

    /// The names of the response columns, in their original order.
    pub fn columns(&self) -> &[String] {
        &self.values.names
    }

    pub fn values(&self) -> &Table<Code> {
        &self.values
    }

    pub fn labels(&self) -> &Table<String> {
        &self.labels
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// The text of the question asked for a column, if it was described.
    pub fn question(&self, column: &str) -> Option<&str> {
        self.column_labels.get(column).map(|s| s.as_str())
    }

    pub fn value_labels(&self, column: &str) -> Option<&ValueLabels> {
        self.value_labels.get(column)
    }

    fn value_column(&self, column: &str) -> Result<&[Code], DataError> {
        self.values
            .column(column)
            .ok_or_else(|| DataError::UnknownColumn {
                column: column.to_string(),
            })
    }

    /// Pairs the distinct values of each column with its distinct labels.
    ///
    /// Both tables come from the same rows in the same order, so the n-th
    /// value to appear corresponds to the n-th label to appear.
    pub fn column_value_label_map(&self) -> Result<BTreeMap<String, ValueLabels>, DataError> {
        let mut res: BTreeMap<String, ValueLabels> = BTreeMap::new();
        for (name, (codes, texts)) in self
            .values
            .names
            .iter()
            .zip(self.values.columns.iter().zip(self.labels.columns.iter()))
        {
            let codes = distinct_in_order(codes);
            let texts = distinct_in_order(texts);
            if codes.len() != texts.len() {
                return Err(DataError::LabelCardinalityMismatch {
                    column: name.clone(),
                    values: codes.len(),
                    labels: texts.len(),
                });
            }
            res.insert(
                name.clone(),
                ValueLabels {
                    entries: codes.into_iter().zip(texts).collect(),
                },
            );
        }
        Ok(res)
    }

    /// Removes every respondent who gave one of the excluded answers.
    ///
    /// The rows to remove are collected over all the columns first, then
    /// removed at once.
    pub fn drop_rows(&mut self, exclusions: &Exclusions) -> Result<(), DataError> {
        if exclusions.is_empty() {
            return Ok(());
        }
        let mut keep = vec![true; self.num_rows()];
        for (column, excluded) in exclusions.iter() {
            let codes = self.value_column(column)?;
            for (row, code) in codes.iter().enumerate() {
                if excluded.contains(code) {
                    debug!("drop_rows: row {} excluded by {}={}", row, column, code);
                    keep[row] = false;
                }
            }
        }
        let before = self.num_rows();
        self.values.retain_rows(&keep);
        self.labels.retain_rows(&keep);
        let mut flags = keep.iter();
        self.weights.retain(|_| *flags.next().unwrap_or(&true));
        self.update_total_weight();
        info!("drop_rows: removed {} rows", before - self.num_rows());
        Ok(())
    }

    /// Reweights the respondents according to their answer to one question.
    ///
    /// Each respondent gets `n * w / total` where `n` is the number of
    /// distinct answers to that question, `w` the raw weight of the answer and
    /// `total` the sum of all the raw weights.
    pub fn set_weights(&mut self, reweighting: &Reweighting) -> Result<(), DataError> {
        let (column, raw_weights) = match reweighting.iter().collect::<Vec<_>>().as_slice() {
            [] => return Ok(()),
            [(column, raw_weights)] => (column.to_string(), *raw_weights),
            _ => {
                return Err(DataError::MultipleWeightColumns {
                    columns: reweighting.keys().cloned().collect(),
                })
            }
        };
        for (code, weight) in raw_weights.iter() {
            if !weight.is_finite() || *weight < 0.0 {
                return Err(DataError::InvalidWeight {
                    column,
                    code: *code,
                    weight: *weight,
                });
            }
        }
        let total: f64 = raw_weights.values().sum();
        let codes = self.value_column(&column)?;
        let distinct = distinct_in_order(codes);
        let mut by_code: HashMap<Code, f64> = HashMap::new();
        for code in distinct.iter() {
            let w = raw_weights
                .get(code)
                .ok_or_else(|| DataError::MissingWeight {
                    column: column.clone(),
                    code: *code,
                })?;
            if *w <= 0.0 {
                return Err(DataError::InvalidWeight {
                    column,
                    code: *code,
                    weight: *w,
                });
            }
            by_code.insert(*code, distinct.len() as f64 * w / total);
        }
        debug!("set_weights: column {}: {:?}", column, by_code);
        let weights: Vec<f64> = codes.iter().map(|code| by_code[code]).collect();
        self.weights = weights;
        self.update_total_weight();
        info!(
            "set_weights: column {}, total weight {}",
            column, self.total_weight
        );
        Ok(())
    }

    /// Counts the respondents for each value of a column, ordered by value.
    ///
    /// With `use_weights`, the count is the sum of the weights of the
    /// respondents, rounded to the nearest integer.
    pub fn column_value_counts(
        &self,
        column: &str,
        use_weights: bool,
    ) -> Result<Vec<(Code, u64)>, DataError> {
        let codes = self.value_column(column)?;
        let mapping = self
            .value_labels
            .get(column)
            .ok_or_else(|| DataError::UnknownColumn {
                column: column.to_string(),
            })?;
        let mut res: Vec<(Code, u64)> = mapping
            .codes()
            .map(|value| {
                let matching = codes
                    .iter()
                    .zip(self.weights.iter())
                    .filter(|(code, _)| **code == value);
                let count = if use_weights {
                    matching.map(|(_, w)| *w).sum::<f64>().round() as u64
                } else {
                    matching.count() as u64
                };
                (value, count)
            })
            .collect();
        res.sort();
        Ok(res)
    }

    /// A new, independent survey with only the respondents matching all the
    /// constraints of the filter.
    ///
    /// The weights of the subset are reset to one.
    pub fn subset(&self, filter: &RowFilter) -> Result<SurveyDataset, DataError> {
        let mut keep = vec![true; self.num_rows()];
        for (column, value) in filter.iter() {
            let codes = self.value_column(column)?;
            for (k, code) in keep.iter_mut().zip(codes.iter()) {
                *k = *k && *code == *value;
            }
        }
        let values = self.values.select_rows(&keep);
        let labels = self.labels.select_rows(&keep);
        info!(
            "subset: {:?} selects {} of {} rows",
            filter,
            values.num_rows(),
            self.num_rows()
        );
        SurveyDataset::from_tables(values, labels, &self.variables)
    }

    /// The tallies of every question, as needed to draw the report.
    ///
    /// The first column is skipped: it holds the identifiers of the respondents.
    pub fn question_tallies(&self) -> Result<Vec<QuestionTally>, DataError> {
        let mut res: Vec<QuestionTally> = Vec::new();
        for column in self.values.names.iter().skip(1) {
            let question = match self.question(column) {
                Some(q) => q.to_string(),
                None => {
                    warn!("question_tallies: no description for column {}", column);
                    column.clone()
                }
            };
            let mapping = self
                .value_labels
                .get(column)
                .ok_or_else(|| DataError::UnknownColumn {
                    column: column.clone(),
                })?;
            let answers: Vec<AnswerTally> = self
                .column_value_counts(column, true)?
                .into_iter()
                .enumerate()
                .filter(|(_, (_, count))| *count > 0)
                .map(|(rank, (code, count))| AnswerTally {
                    code,
                    rank,
                    label: mapping.get(code).unwrap_or_default().to_string(),
                    count,
                    proportion: if self.total_weight > 0.0 {
                        count as f64 / self.total_weight
                    } else {
                        0.0
                    },
                })
                .collect();
            res.push(QuestionTally {
                column: column.clone(),
                question,
                answers,
            });
        }
        Ok(res)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    const VARIABLES: &str = "Variable            Label                                              Position
═══════════════════════════════════════════════════════════════════════════════
                 ID Respondent                                                1
            COUNTRY Where do you live?                                        2
                 S5 What field do you work in?                                3
";

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn table(columns: &[&str], rows: &[&[&str]]) -> RawTable {
        RawTable::new(
            columns.iter().map(|c| c.to_string()).collect(),
            rows.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
        .unwrap()
    }

    fn sample() -> SurveyDataset {
        init();
        let values = table(
            &["ID", "COUNTRY", "S5"],
            &[&["1", "9", "2"], &["2", "4", "1"], &["3", "9", "2"]],
        );
        let labels = table(
            &["ID", "COUNTRY", "S5"],
            &[
                &["1", "USA", "Design"],
                &["2", "France", "Engineering"],
                &["3", "USA", "Design"],
            ],
        );
        SurveyDataset::new(&values, &labels, VARIABLES).unwrap()
    }

    fn exclusions(column: &str, codes: &[Code]) -> Exclusions {
        let mut res = Exclusions::new();
        res.insert(column.to_string(), codes.iter().cloned().collect::<BTreeSet<_>>());
        res
    }

    fn reweighting(column: &str, weights: &[(Code, f64)]) -> Reweighting {
        let mut res = Reweighting::new();
        res.insert(column.to_string(), weights.iter().cloned().collect());
        res
    }

    #[test]
    fn construction() {
        let survey = sample();
        assert_eq!(survey.num_rows(), 3);
        assert_eq!(survey.weights(), &[1.0, 1.0, 1.0]);
        assert_eq!(survey.total_weight(), 3.0);
        assert_eq!(survey.question("S5"), Some("What field do you work in?"));
        assert_eq!(survey.question(WEIGHTS_COLUMN), Some(WEIGHTS_COLUMN));
        let s5 = survey.value_labels("S5").unwrap();
        // Order of first appearance, not numeric order.
        assert_eq!(s5.codes().collect::<Vec<_>>(), vec![2, 1]);
        assert_eq!(s5.get(1), Some("Engineering"));
        assert_eq!(s5.get(2), Some("Design"));
    }

    #[test]
    fn row_count_mismatch_is_fatal() {
        let values = table(&["ID"], &[&["1"], &["2"]]);
        let labels = table(&["ID"], &[&["1"]]);
        let err = SurveyDataset::new(&values, &labels, "").unwrap_err();
        assert_eq!(err, DataError::RowCountMismatch { values: 2, labels: 1 });
    }

    #[test]
    fn label_cardinality_mismatch_is_fatal() {
        let values = table(&["ID", "Q"], &[&["1", "1"], &["2", "2"]]);
        let labels = table(&["ID", "Q"], &[&["1", "Same"], &["2", "Same"]]);
        let err = SurveyDataset::new(&values, &labels, "").unwrap_err();
        assert_eq!(
            err,
            DataError::LabelCardinalityMismatch {
                column: "Q".to_string(),
                values: 2,
                labels: 1
            }
        );
    }

    #[test]
    fn shapes_match_after_cleaning() {
        let values = table(&["ID", "Q"], &[&["1", "a; b"], &[" ", " "], &["2", ""]]);
        let labels = table(&["ID", "Q"], &[&["1", "a; b"], &["", ""], &["2", " "]]);
        let survey = SurveyDataset::new(&values, &labels, "").unwrap();
        assert_eq!(survey.values().num_rows(), survey.labels().num_rows());
        assert_eq!(survey.values().names, survey.labels().names);
        let q = survey.value_labels("Q").unwrap();
        assert_eq!(q.get(0), Some("a; b"));
        assert_eq!(q.get(EMPTY_CODE), Some(EMPTY_LABEL));
    }

    #[test]
    fn drop_rows_is_idempotent() {
        let mut survey = sample();
        let ex = exclusions("COUNTRY", &[4]);
        survey.drop_rows(&ex).unwrap();
        assert_eq!(survey.num_rows(), 2);
        assert_eq!(survey.values().column("ID").unwrap(), &[1, 3]);
        assert_eq!(
            survey.labels().column("COUNTRY").unwrap(),
            &["USA".to_string(), "USA".to_string()]
        );
        assert_eq!(survey.total_weight(), 2.0);
        survey.drop_rows(&ex).unwrap();
        assert_eq!(survey.num_rows(), 2);
    }

    #[test]
    fn drop_rows_collects_over_all_columns() {
        let mut survey = sample();
        let mut ex = exclusions("ID", &[1]);
        ex.insert("S5".to_string(), [1].iter().cloned().collect());
        survey.drop_rows(&ex).unwrap();
        assert_eq!(survey.values().column("ID").unwrap(), &[3]);
    }

    #[test]
    fn drop_rows_empty_is_noop() {
        let mut survey = sample();
        survey.drop_rows(&Exclusions::new()).unwrap();
        assert_eq!(survey, sample());
    }

    #[test]
    fn unknown_columns_are_reported() {
        let mut survey = sample();
        let unknown = DataError::UnknownColumn {
            column: "NOPE".to_string(),
        };
        assert_eq!(
            survey.drop_rows(&exclusions("NOPE", &[1])).unwrap_err(),
            unknown
        );
        assert_eq!(
            survey
                .set_weights(&reweighting("NOPE", &[(1, 1.0)]))
                .unwrap_err(),
            unknown
        );
        let mut filter = RowFilter::new();
        filter.insert("NOPE".to_string(), 1);
        assert_eq!(survey.subset(&filter).unwrap_err(), unknown);
        assert_eq!(survey.column_value_counts("NOPE", true).unwrap_err(), unknown);
    }

    #[test]
    fn uniform_weights_are_all_equal() {
        let mut survey = sample();
        survey
            .set_weights(&reweighting("COUNTRY", &[(9, 1.0), (4, 1.0)]))
            .unwrap();
        assert_eq!(survey.weights(), &[1.0, 1.0, 1.0]);
        assert_eq!(survey.total_weight(), 3.0);
    }

    #[test]
    fn set_weights_normalizes() {
        let mut survey = sample();
        survey
            .set_weights(&reweighting("COUNTRY", &[(9, 1.0), (4, 3.0)]))
            .unwrap();
        // 2 distinct values, total raw weight 4.
        assert_eq!(survey.weights(), &[0.5, 1.5, 0.5]);
        assert_eq!(survey.total_weight(), survey.weights().iter().sum::<f64>());
        assert_eq!(survey.total_weight(), 2.5);
    }

    #[test]
    fn set_weights_requires_every_value() {
        let mut survey = sample();
        let err = survey
            .set_weights(&reweighting("COUNTRY", &[(9, 1.0)]))
            .unwrap_err();
        assert_eq!(
            err,
            DataError::MissingWeight {
                column: "COUNTRY".to_string(),
                code: 4
            }
        );
    }

    #[test]
    fn set_weights_single_column() {
        let mut survey = sample();
        let mut rw = reweighting("COUNTRY", &[(9, 1.0), (4, 1.0)]);
        rw.insert("S5".to_string(), [(1, 1.0), (2, 1.0)].iter().cloned().collect());
        assert!(matches!(
            survey.set_weights(&rw),
            Err(DataError::MultipleWeightColumns { .. })
        ));
        survey.set_weights(&Reweighting::new()).unwrap();
        assert_eq!(survey.total_weight(), 3.0);
    }

    #[test]
    fn value_counts() {
        let mut survey = sample();
        assert_eq!(
            survey.column_value_counts("COUNTRY", false).unwrap(),
            vec![(4, 1), (9, 2)]
        );
        survey
            .set_weights(&reweighting("COUNTRY", &[(9, 1.0), (4, 3.0)]))
            .unwrap();
        let weighted = survey.column_value_counts("COUNTRY", true).unwrap();
        assert_eq!(weighted, vec![(4, 2), (9, 1)]);
        let raw = survey.column_value_counts("S5", false).unwrap();
        assert_eq!(raw.iter().map(|(_, c)| *c).sum::<u64>(), 3);
    }

    #[test]
    fn weighted_counts_sum_to_total_weight() {
        let mut survey = sample();
        survey
            .set_weights(&reweighting("COUNTRY", &[(9, 1.0), (4, 3.0)]))
            .unwrap();
        for column in ["COUNTRY", "S5", "ID"] {
            let counts = survey.column_value_counts(column, true).unwrap();
            let sum = counts.iter().map(|(_, c)| *c).sum::<u64>() as f64;
            assert!(
                (sum - survey.total_weight()).abs() <= 0.5 * counts.len() as f64,
                "{}: {} vs {}",
                column,
                sum,
                survey.total_weight()
            );
        }
    }

    #[test]
    fn raw_counts_sum_to_rows_after_drop() {
        let mut survey = sample();
        survey.drop_rows(&exclusions("S5", &[1])).unwrap();
        assert_eq!(survey.num_rows(), 2);
        for column in ["ID", "COUNTRY", "S5"] {
            let counts = survey.column_value_counts(column, false).unwrap();
            assert_eq!(
                counts.iter().map(|(_, c)| *c).sum::<u64>(),
                survey.num_rows() as u64
            );
        }
    }

    #[test]
    fn value_counts_keep_dropped_values() {
        let mut survey = sample();
        survey.drop_rows(&exclusions("COUNTRY", &[4])).unwrap();
        assert_eq!(
            survey.column_value_counts("COUNTRY", false).unwrap(),
            vec![(4, 0), (9, 2)]
        );
    }

    #[test]
    fn subset_is_independent() {
        let survey = sample();
        let mut filter = RowFilter::new();
        filter.insert("COUNTRY".to_string(), 9);
        let mut sub = survey.subset(&filter).unwrap();
        assert_eq!(sub.num_rows(), 2);
        assert_eq!(sub.values().column("ID").unwrap(), &[1, 3]);
        sub.drop_rows(&exclusions("ID", &[1])).unwrap();
        assert_eq!(sub.num_rows(), 1);
        assert_eq!(survey.num_rows(), 3);
        assert_eq!(survey, sample());
    }

    #[test]
    fn subset_intersects_constraints() {
        let survey = sample();
        let mut filter = RowFilter::new();
        filter.insert("COUNTRY".to_string(), 9);
        filter.insert("ID".to_string(), 3);
        let sub = survey.subset(&filter).unwrap();
        assert_eq!(sub.values().column("ID").unwrap(), &[3]);
    }

    #[test]
    fn subset_resets_weights() {
        let mut survey = sample();
        survey
            .set_weights(&reweighting("COUNTRY", &[(9, 1.0), (4, 3.0)]))
            .unwrap();
        let sub = survey.subset(&RowFilter::new()).unwrap();
        assert_eq!(sub.weights(), &[1.0, 1.0, 1.0]);
    }

    #[test]
    fn one_hot_labels_round_trip() {
        init();
        let values = table(&["ID", "Q"], &[&["1", "A; B"], &["2", "A; B"], &["3", "C"]]);
        let survey = SurveyDataset::new(&values, &values, "").unwrap();
        let q = survey.value_labels("Q").unwrap();
        assert_eq!(
            q.iter().cloned().collect::<Vec<_>>(),
            vec![(0, "A; B".to_string()), (1, "C".to_string())]
        );
    }

    #[test]
    fn tallies_for_the_report() {
        let survey = sample();
        let tallies = survey.question_tallies().unwrap();
        assert_eq!(tallies.len(), 2);
        assert_eq!(tallies[0].column, "COUNTRY");
        assert_eq!(tallies[0].question, "Where do you live?");
        let labels: Vec<&str> = tallies[0].answers.iter().map(|a| a.label.as_str()).collect();
        assert_eq!(labels, vec!["France", "USA"]);
        assert_eq!(tallies[0].answers[1].count, 2);
        assert!((tallies[0].answers[1].proportion - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn tallies_omit_empty_answers() {
        let mut survey = sample();
        survey.drop_rows(&exclusions("COUNTRY", &[4])).unwrap();
        let tallies = survey.question_tallies().unwrap();
        assert_eq!(tallies[0].answers.len(), 1);
        assert_eq!(tallies[0].answers[0].label, "USA");
        assert_eq!(tallies[0].answers[0].rank, 1);
        assert_eq!(tallies[0].answers[0].proportion, 1.0);
    }

    #[test]
    fn ranks_survive_exclusions() {
        init();
        let values = table(&["ID", "COUNTRY"], &[&["1", "4"], &["2", "9"], &["3", "9"]]);
        let labels = table(
            &["ID", "COUNTRY"],
            &[&["1", "France"], &["2", "USA"], &["3", "USA"]],
        );
        let mut survey = SurveyDataset::new(&values, &labels, VARIABLES).unwrap();
        let usa_rank = |s: &SurveyDataset| {
            s.question_tallies().unwrap()[0]
                .answers
                .iter()
                .find(|a| a.label == "USA")
                .map(|a| a.rank)
        };
        assert_eq!(usa_rank(&survey), Some(1));
        survey.drop_rows(&exclusions("COUNTRY", &[4])).unwrap();
        assert_eq!(survey.question_tallies().unwrap()[0].answers.len(), 1);
        assert_eq!(usa_rank(&survey), Some(1));
    }
}
