use rand::rngs::StdRng;
use rand::SeedableRng;
use sorting_hat::quiz::{
    PromptError, QuizError, QuizMode, Respondent, RunOutcome, SelectedItem, SortingHat,
};
use sorting_hat::referential::{ReferentialTables, TableSource};
use std::collections::{HashMap, VecDeque};
use std::io::Cursor;

/// Answers prompts from a script; `None` entries cancel.
struct ScriptedRespondent {
    script: VecDeque<Option<usize>>,
    prompts: Vec<String>,
}

impl ScriptedRespondent {
    fn new(script: impl IntoIterator<Item = Option<usize>>) -> Self {
        Self {
            script: script.into_iter().collect(),
            prompts: Vec::new(),
        }
    }
}

impl Respondent for ScriptedRespondent {
    fn choose(&mut self, prompt: &str, _choices: &[String]) -> Result<Option<usize>, PromptError> {
        self.prompts.push(prompt.to_string());
        Ok(self.script.pop_front().unwrap_or(Some(0)))
    }
}

/// Always picks the first choice.
struct FirstChoice;

impl Respondent for FirstChoice {
    fn choose(&mut self, _prompt: &str, _choices: &[String]) -> Result<Option<usize>, PromptError> {
        Ok(Some(0))
    }
}

fn two_variation_tables() -> ReferentialTables {
    ReferentialTables::from_readers(
        Cursor::new(
            "question_id,variation_id,variation_text\n1,1,Pile ou face ?\n1,2,Face ou pile ?\n",
        ),
        Cursor::new(
            "question_id,variation_id,answer_id,answer_text\n\
1,1,1,Pile\n1,1,2,Face\n1,2,1,Face\n1,2,2,Pile\n",
        ),
        Cursor::new(
            "question_id,variation_id,answer_id,house,weight\n\
1,1,1,house_a,1.0\n\
1,1,2,house_b,1.0\n\
1,2,1,house_a,0.6\n\
1,2,1,house_b,0.4\n",
        ),
    )
    .expect("tables parse")
}

#[test]
fn first_answer_on_first_variation_sorts_into_house_a() {
    let tables = two_variation_tables();
    let mut hat = SortingHat::with_rng(&tables, StdRng::seed_from_u64(1));
    let mut respondent = ScriptedRespondent::new([Some(0)]);

    let items = vec![SelectedItem {
        question_id: 1,
        variation_id: 1,
    }];
    let outcome = hat.run(items, &mut respondent).expect("run completes");

    assert_eq!(respondent.prompts, ["Pile ou face ?"]);
    let RunOutcome::Sorted(verdict) = outcome else {
        panic!("expected a verdict");
    };
    assert_eq!(verdict.house, "house_a");
    assert_eq!(verdict.scores.get("house_a"), Some(1.0));
    assert_eq!(verdict.scores.get("house_b"), Some(0.0));
}

#[test]
fn cancelled_only_question_aborts_without_verdict() {
    let tables = two_variation_tables();
    let mut hat = SortingHat::with_rng(&tables, StdRng::seed_from_u64(2));
    let mut respondent = ScriptedRespondent::new([None]);

    let outcome = hat
        .sort(QuizMode::Sampled, &mut respondent)
        .expect("abort is not an error");

    assert_eq!(outcome, RunOutcome::Aborted);
    assert_eq!(respondent.prompts.len(), 1);
}

#[test]
fn empty_questions_table_resolves_a_tie_among_all_houses() {
    let tables = ReferentialTables::from_readers(
        Cursor::new("question_id,variation_id,variation_text\n"),
        Cursor::new("question_id,variation_id,answer_text\n"),
        Cursor::new(
            "question_id,variation_id,answer_id,house,weight\n\
9,1,1,gryffondor,1.0\n9,1,2,poufsouffle,1.0\n9,1,3,serdaigle,1.0\n9,1,4,serpentard,1.0\n",
        ),
    )
    .expect("tables parse");
    let mut hat = SortingHat::with_rng(&tables, StdRng::seed_from_u64(8));

    let mut wins: HashMap<String, usize> = HashMap::new();
    for _ in 0..400 {
        assert!(hat.select(QuizMode::Sampled).is_empty());
        let RunOutcome::Sorted(verdict) = hat
            .sort(QuizMode::Sampled, &mut FirstChoice)
            .expect("run completes")
        else {
            panic!("expected a verdict");
        };
        assert!(verdict.scores.iter().all(|(_, total)| total == 0.0));
        *wins.entry(verdict.house).or_default() += 1;
    }

    assert_eq!(wins.len(), 4, "every tied house should win sometimes: {wins:?}");
}

#[test]
fn no_known_houses_fails_with_configuration_error() {
    let tables = ReferentialTables::from_readers(
        Cursor::new("question_id,variation_id,variation_text\n"),
        Cursor::new("question_id,variation_id,answer_text\n"),
        Cursor::new("question_id,variation_id,answer_id,house,weight\n"),
    )
    .expect("tables parse");
    let mut hat = SortingHat::with_rng(&tables, StdRng::seed_from_u64(0));

    let error = hat
        .sort(QuizMode::Long, &mut FirstChoice)
        .expect_err("no houses");
    assert!(matches!(error, QuizError::EmptyConfiguration));
}

#[test]
fn bundled_quiz_runs_in_both_modes() {
    let tables = ReferentialTables::bundled().expect("bundled tables parse");
    let mut hat = SortingHat::with_rng(&tables, StdRng::seed_from_u64(2024));

    let mut sampled = ScriptedRespondent::new([]);
    let outcome = hat
        .sort(QuizMode::Sampled, &mut sampled)
        .expect("sampled run completes");
    assert_eq!(sampled.prompts.len(), 7);
    assert!(matches!(outcome, RunOutcome::Sorted(_)));

    let mut long = ScriptedRespondent::new([]);
    let outcome = hat
        .sort(QuizMode::Long, &mut long)
        .expect("long run completes");
    assert_eq!(long.prompts.len(), tables.questions().len());

    // Always picking the first answer leans hard towards gryffondor.
    let RunOutcome::Sorted(verdict) = outcome else {
        panic!("expected a verdict");
    };
    assert_eq!(verdict.house, "gryffondor");
    let total: f64 = verdict.scores.iter().map(|(_, total)| total).sum();
    assert!((total - tables.questions().len() as f64).abs() < 1e-9);
}

#[test]
fn directory_source_loads_the_three_tables() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(
        dir.path().join("questions.csv"),
        "question_id,variation_id,variation_text\n1,1,Chaud ou froid ?\n",
    )
    .expect("write questions");
    std::fs::write(
        dir.path().join("answers.csv"),
        "question_id,variation_id,answer_text\n1,1,Chaud\n1,1,Froid\n",
    )
    .expect("write answers");
    std::fs::write(
        dir.path().join("weights.csv"),
        "question_id,variation_id,answer_id,house,weight\n1,1,1,feu,1.0\n1,1,2,glace,1.0\n",
    )
    .expect("write weights");

    let tables = ReferentialTables::load(&TableSource::Directory(dir.path().to_path_buf()))
        .expect("directory tables load");
    let mut hat = SortingHat::with_rng(&tables, StdRng::seed_from_u64(4));
    let mut respondent = ScriptedRespondent::new([Some(1)]);

    let RunOutcome::Sorted(verdict) = hat
        .sort(QuizMode::Sampled, &mut respondent)
        .expect("run completes")
    else {
        panic!("expected a verdict");
    };
    assert_eq!(verdict.house, "glace");
}
