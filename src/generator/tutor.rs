// src/generator/tutor.rs
use tracing::debug;

use super::fill;
use crate::entity::{TutorReply, TutorRequest};

/// Category of a student's question, picked by keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TutorIntent {
    Explain,
    Process,
    Reasoning,
    Support,
    General,
}

const EXPLAIN: &str = "Great question{{context}}! Let me break this down for you in simple terms:\n\n\
**Key Points:**\n\
1. The main concept here is about understanding the fundamental principles and how they apply.\n\
2. Think of it as building blocks - each part connects to create a complete picture.\n\
3. Real-world examples help make this clearer. For instance, you see this in everyday situations.\n\n\
**Simplified Explanation:**\n\
Imagine you're learning to ride a bicycle. First, you understand balance, then pedaling, then \
steering. Each skill builds on the previous one. That's how this concept works too!\n\n\
Would you like me to explain any specific part in more detail?";

const PROCESS: &str = "Excellent question{{context}}! Let me guide you through the process:\n\n\
**Step-by-Step Approach:**\n\n\
**Step 1:** Start by identifying what you already know. This creates a foundation.\n\n\
**Step 2:** Look at the problem or concept systematically. Break it down into smaller, manageable parts.\n\n\
**Step 3:** Apply the rules or principles you've learned. Don't rush - take your time to think through each step.\n\n\
**Step 4:** Check your work. Does your answer make sense? Can you explain it to someone else?\n\n\
**Pro Tip:** Practice makes perfect! The more you work with these concepts, the more natural they become.\n\n\
Need help with a specific step? Just ask!";

const REASONING: &str = "That's a thoughtful question{{context}}! Understanding the 'why' is crucial:\n\n\
**The Reasoning:**\n\
This concept exists because it helps us solve important problems and understand our world \
better. Here's why it matters:\n\n\
• **Practical Application:** You'll use this knowledge in real situations, not just exams.\n\
• **Foundation Building:** This prepares you for more advanced topics later.\n\
• **Problem-Solving Skills:** Learning this develops your critical thinking abilities.\n\
• **Connection to Other Topics:** This links to many other areas of study.\n\n\
Think of it like learning to cook - you learn basic techniques so you can create amazing dishes later!\n\n\
Does this help clarify things?";

const SUPPORT: &str = "I'm here to help{{context}}! Let's work through this together:\n\n\
**Understanding Made Easy:**\n\n\
When something feels confusing, try these strategies:\n\n\
1. **Read Slowly:** Don't rush. Take time to absorb each part.\n\
2. **Use Examples:** Relate the concept to things you already know.\n\
3. **Draw It Out:** Sometimes a simple diagram or sketch helps clarify ideas.\n\
4. **Teach Someone:** Explaining to a friend (or even a pet!) helps you understand better.\n\
5. **Ask Questions:** There's no such thing as a silly question!\n\n\
**Remember:** Everyone learns at their own pace. What matters is that you keep trying and stay curious!\n\n\
What specific aspect would you like to explore further?";

const GENERAL: &str = "Thank you for your question{{context}}! I'm here to support your learning journey.\n\n\
Based on what you're asking, here are some helpful insights:\n\n\
**Key Understanding:**\n\
The most important thing to grasp is that learning is a process. Each concept builds on what \
you've learned before. Don't worry if something doesn't click immediately - that's completely normal!\n\n\
**Study Tips:**\n\
• Break complex topics into smaller pieces\n\
• Review your notes regularly, not just before tests\n\
• Practice with different types of problems\n\
• Don't hesitate to ask your teacher for clarification\n\n\
**Your Next Steps:**\n\
Focus on understanding the 'why' behind concepts, not just memorizing facts. This deeper \
understanding will serve you well!\n\n\
Feel free to ask me anything else - I'm here to help you succeed!";

const DEFAULT_TOPIC: &str = "General";

/// Classify a message by the first matching keyword group.
///
/// Matching is on lowercased substrings, so "somewhat" counts as "what".
pub fn classify(message: &str) -> TutorIntent {
    let lower = message.to_lowercase();
    let has = |words: &[&str]| words.iter().any(|w| lower.contains(w));

    if has(&["what", "define"]) {
        TutorIntent::Explain
    } else if has(&["how"]) {
        TutorIntent::Process
    } else if has(&["why"]) {
        TutorIntent::Reasoning
    } else if has(&["help", "understand"]) {
        TutorIntent::Support
    } else {
        TutorIntent::General
    }
}

pub fn respond(request: &TutorRequest) -> TutorReply {
    let intent = classify(&request.message);
    let template = match intent {
        TutorIntent::Explain => EXPLAIN,
        TutorIntent::Process => PROCESS,
        TutorIntent::Reasoning => REASONING,
        TutorIntent::Support => SUPPORT,
        TutorIntent::General => GENERAL,
    };

    let context = request
        .topic
        .as_deref()
        .map(|t| format!(" regarding {}", t))
        .unwrap_or_default();

    debug!(?intent, topic = ?request.topic, "tutor reply");

    TutorReply {
        response: fill(template, &[("context", context.as_str())]),
        topic: request
            .topic
            .clone()
            .unwrap_or_else(|| DEFAULT_TOPIC.to_string()),
    }
}
