//! 分数聚合
//!
//! 纯计算，不访问数据库。服务层负责读取输入并写回结果。

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use crate::errors::{ClassroomError, Result};
use crate::models::classrooms::{
    entities::{QuestionCompetence, StudentPoints},
    requests::{QuestionResultInput, QuizQuestionInput},
    responses::{CompetencePoints, RankingEntry},
};

/// 测验挂载计划
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizPlan {
    /// 去重后的题目能力关联，按首次出现的顺序
    pub question_competences: Vec<QuestionCompetence>,
    /// 每个能力的总分增量，按能力 ID 升序
    pub competence_points: Vec<CompetencePoints>,
}

impl QuizPlan {
    /// 涉及的全部能力 ID
    pub fn competence_ids(&self) -> Vec<i64> {
        self.competence_points
            .iter()
            .map(|p| p.competence_id)
            .collect()
    }
}

/// 合并测验 ID，保持原有顺序并跳过重复
pub fn merge_quiz_ids(existing: &[i64], added: &[i64]) -> Vec<i64> {
    let mut seen = HashSet::new();
    existing
        .iter()
        .chain(added.iter())
        .copied()
        .filter(|id| seen.insert(*id))
        .collect()
}

/// 移除测验 ID，未挂载的 ID 被忽略
pub fn remove_quiz_ids(existing: &[i64], removed: &[i64]) -> Vec<i64> {
    let removed: HashSet<i64> = removed.iter().copied().collect();
    existing
        .iter()
        .copied()
        .filter(|id| !removed.contains(id))
        .collect()
}

/// 展开测验题目
///
/// 题目的分数完整计入它标注的每个能力，不做拆分；同一题目重复标注的能力只计一次。
/// 非正数的能力 ID 会被丢弃。能力总分溢出 i64 时返回校验错误。
pub fn plan_quiz_attachment(questions: &[QuizQuestionInput]) -> Result<QuizPlan> {
    let mut seen_pairs = HashSet::new();
    let mut question_competences = Vec::new();
    let mut deltas: BTreeMap<i64, i64> = BTreeMap::new();

    for question in questions {
        let competences: BTreeSet<i64> = question
            .competences_id
            .iter()
            .copied()
            .filter(|id| *id > 0)
            .collect();

        for competence_id in competences {
            add_points(deltas.entry(competence_id).or_insert(0), question.points)?;

            let pair = QuestionCompetence {
                question_id: question.question_id,
                competence_id,
            };
            if seen_pairs.insert(pair) {
                question_competences.push(pair);
            }
        }
    }

    Ok(QuizPlan {
        question_competences,
        competence_points: into_competence_points(deltas),
    })
}

/// 按已存储的题目能力关联累计学生各能力得分
///
/// 没有关联的题目不贡献分数。
pub fn accumulate_student_competence_points(
    results: &[QuestionResultInput],
    associations: &[QuestionCompetence],
) -> Result<Vec<CompetencePoints>> {
    let mut by_question: HashMap<i64, BTreeSet<i64>> = HashMap::new();
    for association in associations {
        by_question
            .entry(association.question_id)
            .or_default()
            .insert(association.competence_id);
    }

    let mut deltas: BTreeMap<i64, i64> = BTreeMap::new();
    for result in results {
        if let Some(competences) = by_question.get(&result.question_id) {
            for competence_id in competences {
                add_points(deltas.entry(*competence_id).or_insert(0), result.obtained_points)?;
            }
        }
    }

    Ok(into_competence_points(deltas))
}

/// 累加分数，溢出时拒绝
pub fn add_points(total: &mut i64, points: i64) -> Result<()> {
    let sum = total.checked_add(points).ok_or_else(|| {
        ClassroomError::validation(format!("Points overflow: {total} + {points}"))
    })?;
    *total = sum;
    Ok(())
}

fn into_competence_points(deltas: BTreeMap<i64, i64>) -> Vec<CompetencePoints> {
    deltas
        .into_iter()
        .map(|(competence_id, points)| CompetencePoints {
            competence_id,
            points,
        })
        .collect()
}

/// 排名：得分降序的稳定排序，名次为 1 起的位置，不并列
pub fn rank_students(mut students: Vec<StudentPoints>) -> Vec<RankingEntry> {
    students.sort_by(|a, b| b.obtained_points.cmp(&a.obtained_points));

    students
        .into_iter()
        .enumerate()
        .map(|(index, student)| RankingEntry {
            rank: index as u32 + 1,
            student_id: student.student_id,
            obtained_points: student.obtained_points,
        })
        .collect()
}

/// 请求中未找到的能力 ID，升序去重
pub fn missing_competences(requested: &[i64], found: &[i64]) -> Vec<i64> {
    let found: HashSet<i64> = found.iter().copied().collect();
    requested
        .iter()
        .copied()
        .filter(|id| !found.contains(id))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(question_id: i64, points: i64, competences_id: Vec<i64>) -> QuizQuestionInput {
        QuizQuestionInput {
            question_id,
            points,
            competences_id,
        }
    }

    fn result(question_id: i64, obtained_points: i64) -> QuestionResultInput {
        QuestionResultInput {
            question_id,
            obtained_points,
        }
    }

    fn pair(question_id: i64, competence_id: i64) -> QuestionCompetence {
        QuestionCompetence {
            question_id,
            competence_id,
        }
    }

    fn points(competence_id: i64, points: i64) -> CompetencePoints {
        CompetencePoints {
            competence_id,
            points,
        }
    }

    #[test]
    fn test_merge_quiz_ids_keeps_order_and_skips_duplicates() {
        assert_eq!(merge_quiz_ids(&[3, 1], &[1, 7, 7, 2]), vec![3, 1, 7, 2]);
        assert_eq!(merge_quiz_ids(&[], &[4]), vec![4]);
        assert_eq!(merge_quiz_ids(&[4], &[]), vec![4]);
    }

    #[test]
    fn test_remove_quiz_ids() {
        assert_eq!(remove_quiz_ids(&[3, 1, 7], &[1]), vec![3, 7]);
        assert_eq!(remove_quiz_ids(&[3, 1, 7], &[1, 3, 7]), Vec::<i64>::new());
    }

    #[test]
    fn test_remove_unattached_quiz_leaves_list_unchanged() {
        assert_eq!(remove_quiz_ids(&[3, 1], &[99]), vec![3, 1]);
    }

    #[test]
    fn test_plan_gives_full_points_to_every_tagged_competence() {
        let plan = plan_quiz_attachment(&[
            question(10, 5, vec![1, 2]),
            question(11, 3, vec![2]),
        ])
        .unwrap();

        assert_eq!(plan.competence_points, vec![points(1, 5), points(2, 8)]);
        assert_eq!(
            plan.question_competences,
            vec![pair(10, 1), pair(10, 2), pair(11, 2)]
        );
        assert_eq!(plan.competence_ids(), vec![1, 2]);
    }

    #[test]
    fn test_plan_counts_repeated_competence_once() {
        let plan = plan_quiz_attachment(&[question(10, 4, vec![3, 3, 3])]).unwrap();

        assert_eq!(plan.competence_points, vec![points(3, 4)]);
        assert_eq!(plan.question_competences, vec![pair(10, 3)]);
    }

    #[test]
    fn test_plan_skips_untagged_questions_and_invalid_ids() {
        let plan = plan_quiz_attachment(&[
            question(10, 4, vec![]),
            question(11, 2, vec![0, -5, 6]),
        ])
        .unwrap();

        assert_eq!(plan.competence_points, vec![points(6, 2)]);
        assert_eq!(plan.question_competences, vec![pair(11, 6)]);
    }

    #[test]
    fn test_plan_repeated_question_adds_points_again() {
        let plan = plan_quiz_attachment(&[
            question(10, 4, vec![1]),
            question(10, 4, vec![1]),
        ])
        .unwrap();

        assert_eq!(plan.competence_points, vec![points(1, 8)]);
        assert_eq!(plan.question_competences, vec![pair(10, 1)]);
    }

    #[test]
    fn test_accumulate_uses_stored_associations() {
        let associations = vec![pair(10, 1), pair(10, 2), pair(11, 2)];
        let accumulated = accumulate_student_competence_points(
            &[result(10, 4), result(11, 1), result(12, 9)],
            &associations,
        )
        .unwrap();

        assert_eq!(accumulated, vec![points(1, 4), points(2, 5)]);
    }

    #[test]
    fn test_accumulate_without_associations_is_empty() {
        let accumulated = accumulate_student_competence_points(&[result(10, 4)], &[]).unwrap();
        assert!(accumulated.is_empty());
    }

    #[test]
    fn test_accumulate_is_order_independent() {
        let associations = vec![pair(10, 1), pair(11, 1)];
        let forward =
            accumulate_student_competence_points(&[result(10, 3), result(11, 7)], &associations)
                .unwrap();
        let backward =
            accumulate_student_competence_points(&[result(11, 7), result(10, 3)], &associations)
                .unwrap();

        assert_eq!(forward, backward);
        assert_eq!(forward, vec![points(1, 10)]);
    }

    #[test]
    fn test_plan_rejects_competence_total_overflow() {
        let err = plan_quiz_attachment(&[
            question(10, i64::MAX, vec![1]),
            question(11, 2, vec![1]),
        ])
        .unwrap_err();
        assert_eq!(err.kind(), crate::errors::ErrorKind::Validation);

        // 不同能力各自累计，不会溢出
        let plan = plan_quiz_attachment(&[
            question(10, i64::MAX, vec![1]),
            question(11, 2, vec![2]),
        ])
        .unwrap();
        assert_eq!(plan.competence_points, vec![points(1, i64::MAX), points(2, 2)]);
    }

    #[test]
    fn test_accumulate_rejects_overflow() {
        let associations = vec![pair(10, 1), pair(11, 1)];
        let err = accumulate_student_competence_points(
            &[result(10, i64::MAX), result(11, 1)],
            &associations,
        )
        .unwrap_err();
        assert_eq!(err.kind(), crate::errors::ErrorKind::Validation);
    }

    #[test]
    fn test_add_points() {
        let mut total = 5;
        add_points(&mut total, 7).unwrap();
        assert_eq!(total, 12);

        let mut total = i64::MAX;
        assert!(add_points(&mut total, 1).is_err());
        assert_eq!(total, i64::MAX);
    }

    #[test]
    fn test_rank_students_is_stable_with_distinct_ranks() {
        let ranking = rank_students(vec![
            StudentPoints {
                student_id: 1,
                obtained_points: 30,
            },
            StudentPoints {
                student_id: 2,
                obtained_points: 10,
            },
            StudentPoints {
                student_id: 3,
                obtained_points: 30,
            },
        ]);

        let order: Vec<(u32, i64, i64)> = ranking
            .iter()
            .map(|e| (e.rank, e.student_id, e.obtained_points))
            .collect();
        assert_eq!(order, vec![(1, 1, 30), (2, 3, 30), (3, 2, 10)]);
    }

    #[test]
    fn test_rank_students_empty() {
        assert!(rank_students(Vec::new()).is_empty());
    }

    #[test]
    fn test_missing_competences_sorted_and_deduplicated() {
        assert_eq!(missing_competences(&[9, 2, 9, 4, 1], &[2, 4]), vec![1, 9]);
        assert!(missing_competences(&[2, 4], &[2, 4, 5]).is_empty());
        assert!(missing_competences(&[], &[]).is_empty());
    }
}
