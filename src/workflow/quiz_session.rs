//! 测验会话 - 流程层
//!
//! 状态：作答中（InProgress）/ 已完成（Completed）。
//! 每次状态转换都返回新的快照，旧快照保持不变。

use std::collections::BTreeMap;

use crate::error::QuizError;
use crate::models::QuizQuestion;

/// 会话状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    InProgress,
    Completed,
}

/// 测验会话快照
///
/// 进入测验页面时创建，离开或重新开始时丢弃
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    current_question_index: usize,
    /// 题目索引 → 选项索引，未作答的题目没有记录
    selected_answers: BTreeMap<usize, usize>,
    completed: bool,
    /// 每道题的选项数量
    option_counts: Vec<usize>,
}

impl QuizSession {
    /// 创建新的会话；题目为空时直接处于完成状态
    pub fn new(quiz: &[QuizQuestion]) -> Self {
        Self {
            current_question_index: 0,
            selected_answers: BTreeMap::new(),
            completed: quiz.is_empty(),
            option_counts: quiz.iter().map(|q| q.options.len()).collect(),
        }
    }

    pub fn state(&self) -> QuizState {
        if self.completed {
            QuizState::Completed
        } else {
            QuizState::InProgress
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn current_question_index(&self) -> usize {
        self.current_question_index
    }

    pub fn question_count(&self) -> usize {
        self.option_counts.len()
    }

    pub fn is_last_question(&self) -> bool {
        self.current_question_index + 1 >= self.question_count()
    }

    /// 某道题已选的选项
    pub fn selected_answer(&self, question_index: usize) -> Option<usize> {
        self.selected_answers.get(&question_index).copied()
    }

    pub fn selected_answers(&self) -> &BTreeMap<usize, usize> {
        &self.selected_answers
    }

    /// 当前题是否已作答
    ///
    /// 状态机本身不限制未作答时前进，由展示层据此禁用"下一题"
    pub fn can_advance(&self) -> bool {
        self.selected_answers.contains_key(&self.current_question_index)
    }

    /// 当前进度百分比
    pub fn progress_percent(&self) -> f64 {
        if self.question_count() == 0 {
            return 100.0;
        }
        (self.current_question_index + 1) as f64 * 100.0 / self.question_count() as f64
    }

    /// 为当前题选择答案（覆盖已有答案）
    #[must_use = "状态转换返回新的会话快照"]
    pub fn select(&self, option_index: usize) -> Result<Self, QuizError> {
        self.ensure_in_progress()?;

        let count = self.option_counts[self.current_question_index];
        if option_index >= count {
            return Err(QuizError::OptionOutOfRange {
                option: option_index,
                count,
            });
        }

        let mut next = self.clone();
        next.selected_answers
            .insert(self.current_question_index, option_index);
        Ok(next)
    }

    /// 前进一题；在最后一题时结束测验
    #[must_use = "状态转换返回新的会话快照"]
    pub fn advance(&self) -> Result<Self, QuizError> {
        self.ensure_in_progress()?;

        let mut next = self.clone();
        if self.is_last_question() {
            next.completed = true;
        } else {
            next.current_question_index += 1;
        }
        Ok(next)
    }

    /// 后退一题；已在第一题时不变
    #[must_use = "状态转换返回新的会话快照"]
    pub fn retreat(&self) -> Result<Self, QuizError> {
        self.ensure_in_progress()?;

        let mut next = self.clone();
        next.current_question_index = self.current_question_index.saturating_sub(1);
        Ok(next)
    }

    /// 从完成状态重新开始
    #[must_use = "状态转换返回新的会话快照"]
    pub fn restart(&self) -> Result<Self, QuizError> {
        if !self.completed {
            return Err(QuizError::NotCompleted);
        }

        Ok(Self {
            current_question_index: 0,
            selected_answers: BTreeMap::new(),
            completed: self.option_counts.is_empty(),
            option_counts: self.option_counts.clone(),
        })
    }

    fn ensure_in_progress(&self) -> Result<(), QuizError> {
        if self.completed {
            Err(QuizError::Completed)
        } else {
            Ok(())
        }
    }
}
