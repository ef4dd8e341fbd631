/*!

This is the long-form manual for `survey_data` and `surveyrep`.

## Input files

A survey is described by three files exported from PSPP (or SPSS), plus an optional settings file.
With the default options of `surveyrep --survey privacy`, they are looked up in the `data` directory:

* `privacy_values.csv` the responses as numerical codes:

```text
SAVE TRANSLATE /OUTFILE="privacy_values.csv" /TYPE=CSV /FIELDNAMES.
```

* `privacy_labels.csv` the same responses, with the text of each answer:

```text
SAVE TRANSLATE /OUTFILE="privacy_labels.csv" /TYPE=CSV /FIELDNAMES /CELLS=LABELS.
```

* `privacy_variables.txt` the text of each question, as printed by:

```text
DISPLAY LABELS.
```

* `privacy.json` (optional) the settings, see below.

Both CSV files must have the same columns and the same rows, in the same order. Blank cells are allowed;
they are shown as `(Not available)` in the report. Columns that do not hold numbers in the values file
(for example questions with several answers, written as `Answer1; Answer2`) are encoded by giving each
distinct answer a number, in order of appearance.

The first column is expected to be the identifier of the respondent. It is not shown in the report.

## Settings

```json
{
  "excludeIds": { "ID": [12, 57] },
  "suspiciousIds": { "S3": [1] },
  "weights": { "GENDER": { "1": 1.0, "2": 1.2 } }
}
```

* `excludeIds`, `suspiciousIds`: for each column, the values that disqualify a respondent. All the
respondents that gave one of these values in one of these columns are removed.
* `weights`: reweights the respondents according to their answer to one question. Each respondent gets
the weight `n * w / total`, where `n` is the number of distinct answers given to that question, `w` the
weight of the respondent's answer and `total` the sum of all the weights listed. Every answer given to
that question must have a weight.
* Any of the three keys may be left out, or given as `[]` or `null`, when there is nothing to apply.

A missing settings file is the same as an empty one.

## Segments

`--segment COUNTRY=9` restricts the report to the respondents who answered `9` to `COUNTRY`. When the
option is repeated, only the respondents matching all the constraints are kept. The weights are applied
again on the segment.
*/
