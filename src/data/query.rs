use std::collections::BTreeSet;

use super::model::{Cohort, CohortDataset};

/// The five houses, in roster display order.
pub const HOUSES: [&str; 5] = [
    "Dumbledore's Army",
    "Gryffindor",
    "Hufflepuff",
    "Ravenclaw",
    "Slytherin",
];

// ---------------------------------------------------------------------------
// Query operations – each a pure linear scan over the dataset
// ---------------------------------------------------------------------------

/// Distinct non-empty house values present in the data.
pub fn all_houses(dataset: &CohortDataset) -> BTreeSet<String> {
    dataset
        .records
        .iter()
        .filter(|r| !r.house.is_empty())
        .map(|r| r.house.clone())
        .collect()
}

/// Full names sorted lexicographically.
///
/// `None` lists every enrolled student, excluding ghosts and instructors.
/// `Some(label)` matches the cohort's text label exactly, so `Some("G")`
/// lists the ghosts.
pub fn students_by_cohort(dataset: &CohortDataset, cohort: Option<&str>) -> Vec<String> {
    let mut names: Vec<String> = dataset
        .records
        .iter()
        .filter(|r| match cohort {
            None => r.cohort.is_student(),
            Some(label) => r.cohort.label() == label,
        })
        .map(|r| r.full_name())
        .collect();
    names.sort();
    names
}

/// Seven labelled rosters in fixed order: the five houses, then ghosts, then
/// instructors. Each roster is sorted lexicographically.
///
/// A record joins a house roster by exact house name. Records matching none
/// of the five fall back to the ghost/instructor cohort sentinel; anything
/// else (unknown house, ordinary cohort) is omitted.
pub fn all_names_by_house(dataset: &CohortDataset) -> Vec<(String, Vec<String>)> {
    let mut groups: Vec<(String, Vec<String>)> = HOUSES
        .iter()
        .map(|house| (house.to_string(), Vec::new()))
        .collect();
    groups.push(("Ghosts".to_string(), Vec::new()));
    groups.push(("Instructors".to_string(), Vec::new()));

    for record in &dataset.records {
        let slot = HOUSES
            .iter()
            .position(|house| *house == record.house)
            .or(match record.cohort {
                Cohort::Ghost => Some(HOUSES.len()),
                Cohort::Instructor => Some(HOUSES.len() + 1),
                Cohort::Term(_) => None,
            });
        if let Some(i) = slot {
            groups[i].1.push(record.full_name());
        }
    }

    for (_, names) in &mut groups {
        names.sort();
    }
    groups
}

/// Every record as a `(full_name, house, head_of_house, cohort)` tuple, in
/// file order.
pub fn all_data(dataset: &CohortDataset) -> Vec<(String, String, String, String)> {
    dataset
        .records
        .iter()
        .map(|r| {
            (
                r.full_name(),
                r.house.clone(),
                r.head_of_house.clone(),
                r.cohort.label().to_string(),
            )
        })
        .collect()
}

/// Cohort of the last record whose full name matches, or `None`.
pub fn get_cohort_for<'a>(dataset: &'a CohortDataset, name: &str) -> Option<&'a Cohort> {
    dataset
        .records
        .iter()
        .rev()
        .find(|r| r.full_name() == name)
        .map(|r| &r.cohort)
}

/// Last names occurring more than once.
pub fn find_duped_last_names(dataset: &CohortDataset) -> BTreeSet<String> {
    let mut seen = BTreeSet::new();
    let mut duped = BTreeSet::new();
    for record in &dataset.records {
        if !seen.insert(record.last_name.clone()) {
            duped.insert(record.last_name.clone());
        }
    }
    duped
}

/// Everyone else sharing the target's house and cohort.
///
/// Empty when `name` is not in the data. On duplicate names the last record
/// decides the target's house and cohort, consistent with [`get_cohort_for`].
pub fn get_housemates_for(dataset: &CohortDataset, name: &str) -> BTreeSet<String> {
    let Some(target) = dataset.records.iter().rev().find(|r| r.full_name() == name) else {
        return BTreeSet::new();
    };

    dataset
        .records
        .iter()
        .filter(|r| r.house == target.house && r.cohort == target.cohort)
        .map(|r| r.full_name())
        .filter(|housemate| housemate != name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::super::model::Record;
    use super::*;

    fn record(first: &str, last: &str, house: &str, head: &str, cohort: &str) -> Record {
        Record {
            first_name: first.into(),
            last_name: last.into(),
            house: house.into(),
            head_of_house: head.into(),
            cohort: Cohort::parse(cohort),
        }
    }

    fn sample() -> CohortDataset {
        CohortDataset::from_records(vec![
            record("Harry", "Potter", "Gryffindor", "McGonagall", "Fall 2015"),
            record("Hermione", "Granger", "Gryffindor", "McGonagall", "Fall 2015"),
            record("Ron", "Weasley", "Gryffindor", "McGonagall", "Winter 2016"),
            record("Ginny", "Weasley", "Gryffindor", "McGonagall", "Spring 2016"),
            record("Cho", "Chang", "Ravenclaw", "Flitwick", "Fall 2015"),
            record("Hannah", "Abbott", "Hufflepuff", "Sprout", "Winter 2016"),
            record("Draco", "Malfoy", "Slytherin", "Snape", "Fall 2015"),
            record("Zacharias", "Smith", "Dumbledore's Army", "Dumbledore", "Spring 2016"),
            record("Nearly Headless", "Nick", "", "", "G"),
            record("Severus", "Snape", "", "Dumbledore", "I"),
            record("Filius", "Flitwick", "", "Dumbledore", "I"),
        ])
    }

    #[test]
    fn all_houses_distinct_and_non_empty() {
        let houses = all_houses(&sample());
        assert!(houses.iter().all(|h| !h.is_empty()));
        let expected: BTreeSet<String> = [
            "Dumbledore's Army",
            "Gryffindor",
            "Hufflepuff",
            "Ravenclaw",
            "Slytherin",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        assert_eq!(houses, expected);
    }

    #[test]
    fn students_by_cohort_default_excludes_sentinels() {
        let names = students_by_cohort(&sample(), None);
        assert_eq!(names.len(), 8);
        assert!(!names.contains(&"Nearly Headless Nick".to_string()));
        assert!(!names.contains(&"Severus Snape".to_string()));
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn students_by_cohort_exact_match() {
        let names = students_by_cohort(&sample(), Some("Fall 2015"));
        assert_eq!(
            names,
            ["Cho Chang", "Draco Malfoy", "Harry Potter", "Hermione Granger"]
        );
        assert!(students_by_cohort(&sample(), Some("Summer 2016")).is_empty());
    }

    #[test]
    fn sentinel_label_is_queryable_as_a_cohort() {
        assert_eq!(
            students_by_cohort(&sample(), Some("G")),
            ["Nearly Headless Nick"]
        );
    }

    #[test]
    fn rosters_fixed_order_and_sorted() {
        let groups = all_names_by_house(&sample());
        let labels: Vec<&str> = groups.iter().map(|(label, _)| label.as_str()).collect();
        assert_eq!(
            labels,
            [
                "Dumbledore's Army",
                "Gryffindor",
                "Hufflepuff",
                "Ravenclaw",
                "Slytherin",
                "Ghosts",
                "Instructors"
            ]
        );
        assert_eq!(
            groups[1].1,
            ["Ginny Weasley", "Harry Potter", "Hermione Granger", "Ron Weasley"]
        );
        assert_eq!(groups[5].1, ["Nearly Headless Nick"]);
        assert_eq!(groups[6].1, ["Filius Flitwick", "Severus Snape"]);
    }

    #[test]
    fn rosters_partition_the_eligible_records() {
        let dataset = sample();
        let groups = all_names_by_house(&dataset);
        let mut combined: Vec<String> = groups.into_iter().flat_map(|(_, names)| names).collect();
        combined.sort();

        let mut eligible: Vec<String> = dataset
            .records
            .iter()
            .filter(|r| {
                HOUSES.contains(&r.house.as_str()) || !r.cohort.is_student()
            })
            .map(|r| r.full_name())
            .collect();
        eligible.sort();

        assert_eq!(combined, eligible);
    }

    #[test]
    fn cohort_lookup_takes_the_last_match() {
        let mut records = sample().records;
        records.push(record("Harry", "Potter", "Slytherin", "Snape", "Winter 2016"));
        let dataset = CohortDataset::from_records(records);

        let cohort = get_cohort_for(&dataset, "Harry Potter").unwrap();
        assert_eq!(cohort.label(), "Winter 2016");
    }

    #[test]
    fn cohort_lookup_unknown_name_is_none() {
        assert!(get_cohort_for(&sample(), "Someone Else").is_none());
    }

    #[test]
    fn duped_last_names_counts_at_least_two() {
        let duped = find_duped_last_names(&sample());
        let expected: BTreeSet<String> = ["Weasley".to_string()].into_iter().collect();
        assert_eq!(duped, expected);
    }

    #[test]
    fn housemates_share_house_and_cohort() {
        let housemates = get_housemates_for(&sample(), "Harry Potter");
        let expected: BTreeSet<String> = ["Hermione Granger".to_string()].into_iter().collect();
        assert_eq!(housemates, expected);
    }

    #[test]
    fn housemates_never_include_self_and_unknown_is_empty() {
        let housemates = get_housemates_for(&sample(), "Ron Weasley");
        assert!(!housemates.contains("Ron Weasley"));
        assert!(get_housemates_for(&sample(), "Someone Else").is_empty());
    }

    #[test]
    fn all_data_preserves_file_order() {
        let data = all_data(&sample());
        assert_eq!(data.len(), 11);
        assert_eq!(
            data[0],
            (
                "Harry Potter".to_string(),
                "Gryffindor".to_string(),
                "McGonagall".to_string(),
                "Fall 2015".to_string()
            )
        );
        assert_eq!(data[9].3, "I");
    }
}
