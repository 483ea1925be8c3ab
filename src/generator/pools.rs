// src/generator/pools.rs
//! Fixed question template pools.
//!
//! Multiple-choice pools are keyed by subject, then difficulty. Written
//! (short answer / essay) prompts are keyed by question type only.

use crate::entity::Difficulty;

/// A multiple-choice template. Options are rendered as A-D in array order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct McTemplate {
    pub stem: &'static str,
    pub options: [&'static str; 4],
    pub explanation: &'static str,
}

/// A short-answer or essay prompt with its model-answer rubric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrittenTemplate {
    pub prompt: &'static str,
    pub model_answer: &'static str,
    pub explanation: &'static str,
}

#[derive(Debug)]
pub struct SubjectPool {
    pub subject: &'static str,
    pub easy: &'static [McTemplate],
    pub medium: &'static [McTemplate],
    pub hard: &'static [McTemplate],
}

impl SubjectPool {
    /// Templates for `difficulty`, falling back to the easy tier when that
    /// tier has none.
    pub fn templates(&self, difficulty: Difficulty) -> &'static [McTemplate] {
        let tier = match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        };
        if tier.is_empty() {
            self.easy
        } else {
            tier
        }
    }
}

/// Pool for `subject` (case-insensitive), or the default pool.
pub fn pool_for(subject: &str) -> &'static SubjectPool {
    let wanted = subject.trim();
    SUBJECT_POOLS
        .iter()
        .find(|p| p.subject.eq_ignore_ascii_case(wanted))
        .unwrap_or(&DEFAULT_POOL)
}

pub fn written_pool(essay: bool) -> &'static [WrittenTemplate] {
    if essay {
        ESSAY_PROMPTS
    } else {
        SHORT_ANSWER_PROMPTS
    }
}

pub static SUBJECT_POOLS: &[SubjectPool] = &[MATHEMATICS, ENGLISH, PHYSICS, ECONOMICS];

const MATHEMATICS: SubjectPool = SubjectPool {
    subject: "Mathematics",
    easy: &[
        McTemplate {
            stem: "Which of the following best describes {{topic}} in {{subject}}?",
            options: [
                "A method for relating quantities using the rules of {{topic}}",
                "A way of measuring physical objects without numbers",
                "A historical account of how {{topic}} was discovered",
                "A set of guesses that avoids calculation",
            ],
            explanation: "{{topic}} is defined by the rules it uses to relate quantities.",
        },
        McTemplate {
            stem: "What is the first step when solving a basic {{topic}} problem?",
            options: [
                "Identify the known and unknown quantities",
                "Write down the final answer",
                "Skip to the most difficult part",
                "Ignore the information given",
            ],
            explanation: "Every {{topic}} problem starts by separating what is known from what is sought.",
        },
    ],
    medium: &[
        McTemplate {
            stem: "Which rule is most useful when simplifying expressions in {{topic}}?",
            options: [
                "Apply operations in the correct order",
                "Always add before multiplying",
                "Remove all brackets without expanding them",
                "Round every number to the nearest ten first",
            ],
            explanation: "Simplifying in {{topic}} depends on respecting the order of operations.",
        },
        McTemplate {
            stem: "How can you check a solution to a {{topic}} problem?",
            options: [
                "Substitute the answer back into the original problem",
                "Compare it with a classmate's answer",
                "Check that the answer is a whole number",
                "Assume it is correct if it looks reasonable",
            ],
            explanation: "Substitution confirms the answer satisfies the conditions of the problem.",
        },
        McTemplate {
            stem: "Which representation shows the relationship in a {{topic}} problem most clearly?",
            options: [
                "An equation or graph that links the quantities",
                "A paragraph describing the problem's history",
                "A list of unrelated numbers",
                "A picture with no labels",
            ],
            explanation: "Equations and graphs make the structure of {{topic}} relationships explicit.",
        },
    ],
    hard: &[
        McTemplate {
            stem: "Which strategy generalises a {{topic}} result to all cases?",
            options: [
                "Constructing a proof from known principles",
                "Testing three examples and stopping",
                "Choosing the simplest example only",
                "Relying on a diagram drawn to scale",
            ],
            explanation: "Only a proof establishes that a {{topic}} result holds in general.",
        },
        McTemplate {
            stem: "When two methods for a {{topic}} problem give different answers, what should you conclude?",
            options: [
                "At least one method contains an error that must be found",
                "Both answers are equally correct",
                "The problem has no solution",
                "The longer method is always right",
            ],
            explanation: "Consistent {{subject}} reasoning cannot produce two different answers to one problem.",
        },
    ],
};

const ENGLISH: SubjectPool = SubjectPool {
    subject: "English",
    easy: &[
        McTemplate {
            stem: "Which sentence uses {{topic}} correctly?",
            options: [
                "A sentence that follows the rules of {{topic}}",
                "A sentence with no verb",
                "A sentence that mixes tenses at random",
                "A sentence missing its subject and object",
            ],
            explanation: "Correct usage of {{topic}} follows its grammatical rules.",
        },
        McTemplate {
            stem: "What is the main purpose of {{topic}} in {{subject}}?",
            options: [
                "To make meaning clear to the reader",
                "To make sentences as long as possible",
                "To replace punctuation",
                "To avoid using vocabulary",
            ],
            explanation: "{{topic}} exists to communicate meaning clearly.",
        },
    ],
    medium: &[
        McTemplate {
            stem: "Which revision best improves a passage that misuses {{topic}}?",
            options: [
                "Rewrite the sentences so {{topic}} is applied consistently",
                "Delete every second sentence",
                "Add more adjectives to each line",
                "Change the title only",
            ],
            explanation: "Consistent application of {{topic}} repairs the passage.",
        },
        McTemplate {
            stem: "How does {{topic}} affect the tone of a text?",
            options: [
                "It shapes how the reader perceives the writer's attitude",
                "It has no effect on tone",
                "It only changes the length of the text",
                "It determines the font of the text",
            ],
            explanation: "Choices in {{topic}} influence the tone a reader perceives.",
        },
    ],
    hard: &[McTemplate {
        stem: "Which analysis best evaluates a writer's use of {{topic}}?",
        options: [
            "One that links specific examples of {{topic}} to their effect on meaning",
            "One that lists examples without comment",
            "One that summarises the plot",
            "One that counts the words in each paragraph",
        ],
        explanation: "Evaluation connects the technique to its effect on meaning.",
    }],
};

const PHYSICS: SubjectPool = SubjectPool {
    subject: "Physics",
    easy: &[
        McTemplate {
            stem: "Which statement best describes {{topic}}?",
            options: [
                "A physical phenomenon that can be measured and described by laws",
                "An opinion about how nature should behave",
                "A unit used only in chemistry",
                "A process that cannot be observed",
            ],
            explanation: "{{topic}} is described by measurable physical laws.",
        },
        McTemplate {
            stem: "Which instrument would you most likely use to study {{topic}} in the laboratory?",
            options: [
                "One that measures the quantity involved in {{topic}}",
                "A paintbrush",
                "A dictionary",
                "A calendar",
            ],
            explanation: "Experiments on {{topic}} need instruments that measure its quantities.",
        },
    ],
    medium: &[
        McTemplate {
            stem: "Which quantity must be kept constant in a fair test of {{topic}}?",
            options: [
                "Every variable except the one being investigated",
                "Only the temperature of the room",
                "The name of the experimenter",
                "Nothing needs to be kept constant",
            ],
            explanation: "A fair test of {{topic}} changes one variable at a time.",
        },
        McTemplate {
            stem: "What does a straight-line graph in a {{topic}} experiment suggest?",
            options: [
                "The quantities are directly related",
                "The experiment failed",
                "There is no relationship",
                "The readings were copied",
            ],
            explanation: "A straight line indicates a linear relationship between the quantities.",
        },
    ],
    hard: &[
        McTemplate {
            stem: "Which explanation accounts for an unexpected result in a {{topic}} experiment?",
            options: [
                "A systematic error in measurement or an uncontrolled variable",
                "The laws of {{subject}} changed during the experiment",
                "Results are random and need no explanation",
                "The apparatus was painted the wrong colour",
            ],
            explanation: "Unexpected results in {{topic}} are traced to errors or uncontrolled variables.",
        },
        McTemplate {
            stem: "How would you apply {{topic}} to predict the outcome of a new situation?",
            options: [
                "Use the governing equation with measured values",
                "Guess based on previous results only",
                "Assume the outcome is the same as last time",
                "Ask for the answer without calculating",
            ],
            explanation: "Predictions in {{subject}} come from applying the governing equations.",
        },
    ],
};

const ECONOMICS: SubjectPool = SubjectPool {
    subject: "Economics",
    easy: &[
        McTemplate {
            stem: "Which of the following best defines {{topic}}?",
            options: [
                "A concept describing how people allocate scarce resources through {{topic}}",
                "A law that sets the price of every good",
                "A branch of geography",
                "A method of printing money",
            ],
            explanation: "{{topic}} concerns the allocation of scarce resources.",
        },
        McTemplate {
            stem: "Who is most directly affected by changes in {{topic}}?",
            options: [
                "Households, firms and government",
                "Only foreign countries",
                "Nobody",
                "Only economists",
            ],
            explanation: "{{topic}} affects every economic agent.",
        },
    ],
    medium: &[McTemplate {
        stem: "What is the likely effect of a sudden change in {{topic}} on market prices?",
        options: [
            "Prices adjust as supply and demand respond",
            "Prices never change",
            "All goods become free",
            "Only luxury goods are affected",
        ],
        explanation: "Markets respond to changes in {{topic}} through supply and demand.",
    }],
    hard: &[],
};

pub static DEFAULT_POOL: SubjectPool = SubjectPool {
    subject: "default",
    easy: &[
        McTemplate {
            stem: "Which of the following best describes {{topic}} in {{subject}}?",
            options: [
                "Option A related to {{topic}}",
                "Option B explaining {{topic}} concept",
                "Option C describing {{topic}} principle",
                "Option D about {{topic}} application",
            ],
            explanation: "The correct answer relates to the fundamental understanding of {{topic}}.",
        },
        McTemplate {
            stem: "Which statement about {{topic}} is true?",
            options: [
                "{{topic}} is an important idea in {{subject}}",
                "{{topic}} has no connection to {{subject}}",
                "{{topic}} cannot be learned",
                "{{topic}} is only studied at university",
            ],
            explanation: "{{topic}} is a core part of the {{subject}} curriculum.",
        },
    ],
    medium: &[
        McTemplate {
            stem: "Which example best illustrates {{topic}} in {{subject}}?",
            options: [
                "A real situation where the principles of {{topic}} apply",
                "A situation unrelated to {{subject}}",
                "A definition copied from memory",
                "A list of key words",
            ],
            explanation: "Good examples show the principles of {{topic}} in action.",
        },
        McTemplate {
            stem: "Why is {{topic}} important in {{subject}}?",
            options: [
                "It connects to other key ideas in {{subject}}",
                "It is only needed for examinations",
                "It replaces every other topic",
                "It is not important",
            ],
            explanation: "{{topic}} links to other areas of {{subject}}.",
        },
    ],
    hard: &[
        McTemplate {
            stem: "Which argument best evaluates the significance of {{topic}} in {{subject}}?",
            options: [
                "One that weighs evidence for the impact of {{topic}} across contexts",
                "One that repeats the definition of {{topic}}",
                "One that ignores counter-examples",
                "One based on personal preference alone",
            ],
            explanation: "Evaluation weighs evidence across contexts.",
        },
        McTemplate {
            stem: "How would you apply {{topic}} to solve an unfamiliar problem in {{subject}}?",
            options: [
                "Identify the underlying principle of {{topic}} and adapt it to the new case",
                "Repeat the steps of a memorised example exactly",
                "Avoid the problem",
                "Choose an answer at random",
            ],
            explanation: "Transferring {{topic}} to new problems requires understanding its principles.",
        },
    ],
};

const SHORT_ANSWER_PROMPTS: &[WrittenTemplate] = &[
    WrittenTemplate {
        prompt: "Explain the concept of {{topic}} in {{subject}}.",
        model_answer: "A comprehensive explanation of {{topic}} including its key principles and applications.",
        explanation: "Students should demonstrate understanding of {{topic}} by explaining the main concepts clearly and providing relevant examples.",
    },
    WrittenTemplate {
        prompt: "Give two real-world examples of {{topic}} and explain each briefly.",
        model_answer: "Two distinct, accurate examples of {{topic}}, each linked to the underlying principle.",
        explanation: "Answers should connect each example to what makes it an instance of {{topic}}.",
    },
    WrittenTemplate {
        prompt: "State the key terms associated with {{topic}} and define them.",
        model_answer: "Correct definitions of the main terms used when studying {{topic}} in {{subject}}.",
        explanation: "Precise definitions show command of the vocabulary of {{topic}}.",
    },
];

const ESSAY_PROMPTS: &[WrittenTemplate] = &[
    WrittenTemplate {
        prompt: "Write a detailed essay discussing {{topic}} in {{subject}}, including its importance, applications, and impact.",
        model_answer: "A well-structured essay covering the significance of {{topic}}, providing detailed analysis and examples.",
        explanation: "The essay should include an introduction, body paragraphs with clear arguments, and a conclusion. Students should demonstrate critical thinking and comprehensive knowledge.",
    },
    WrittenTemplate {
        prompt: "Critically evaluate the role of {{topic}} in {{subject}}, considering different points of view.",
        model_answer: "A balanced essay that presents and weighs several perspectives on {{topic}} before reaching a justified conclusion.",
        explanation: "Strong essays compare viewpoints on {{topic}} with evidence and reach a reasoned judgement.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::fill;

    const VARS: [(&str, &str); 2] = [("topic", "Fractions"), ("subject", "Mathematics")];

    fn assert_rendered(text: &str, context: &str) {
        let rendered = fill(text, &VARS);
        assert!(!rendered.trim().is_empty(), "empty text in {context}");
        assert!(!rendered.contains("{{"), "unfilled placeholder in {context}: {rendered}");
        assert!(!rendered.contains("}}"), "stray braces in {context}: {rendered}");
    }

    #[test]
    fn test_every_pool_has_easy_templates() {
        for pool in SUBJECT_POOLS.iter().chain(std::iter::once(&DEFAULT_POOL)) {
            assert!(!pool.easy.is_empty(), "{} has no easy templates", pool.subject);
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(pool_for("mathematics").subject, "Mathematics");
        assert_eq!(pool_for("  PHYSICS ").subject, "Physics");
    }

    #[test]
    fn test_unknown_subject_uses_default_pool() {
        assert_eq!(pool_for("Art").subject, "default");
    }

    #[test]
    fn test_mathematics_easy_pool_has_two_templates() {
        assert_eq!(pool_for("Mathematics").templates(Difficulty::Easy).len(), 2);
    }

    #[test]
    fn test_empty_tier_falls_back_to_easy() {
        let pool = pool_for("Economics");
        assert_eq!(pool.templates(Difficulty::Hard), pool.easy);
        assert_eq!(pool.templates(Difficulty::Medium), pool.medium);
    }

    #[test]
    fn test_written_pools_nonempty() {
        assert!(!written_pool(true).is_empty());
        assert!(!written_pool(false).is_empty());
    }

    #[test]
    fn test_every_multiple_choice_template_renders() {
        for pool in SUBJECT_POOLS.iter().chain(std::iter::once(&DEFAULT_POOL)) {
            for (tier, templates) in [("easy", pool.easy), ("medium", pool.medium), ("hard", pool.hard)] {
                for (i, template) in templates.iter().enumerate() {
                    let context = format!("{} {} #{}", pool.subject, tier, i);
                    assert_rendered(template.stem, &context);
                    assert_rendered(template.explanation, &context);
                    for option in template.options {
                        assert_rendered(option, &context);
                    }
                }
            }
        }
    }

    #[test]
    fn test_every_written_template_renders() {
        for essay in [false, true] {
            for (i, template) in written_pool(essay).iter().enumerate() {
                let context = format!("written essay={} #{}", essay, i);
                assert_rendered(template.prompt, &context);
                assert_rendered(template.model_answer, &context);
                assert_rendered(template.explanation, &context);
            }
        }
    }
}
