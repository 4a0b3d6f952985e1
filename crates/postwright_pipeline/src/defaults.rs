//! Built-in user prompt and the fallback post.

/// User prompt used when neither the caller nor the store supplies one.
pub const DEFAULT_USER_PROMPT: &str =
    "Create a post about a trending technology topic with expert insights and real-world examples.";

/// Post returned whenever generation fails. Identical on every call.
pub const FALLBACK_POST: &str =
    "🔍 Today I was reflecting on current technology trends and their growing impact on our industry.

After working with several teams implementing new solutions, I've noticed one key pattern: the organizations that succeed aren't just adopting the latest technology—they're reimagining their entire workflow around it.

Here's what I learned from a recent project:
A mid-sized company increased their efficiency by 40% not because they had the most advanced tools, but because they took time to train their team properly and integrated the technology thoughtfully into their existing processes.

The takeaway? Technology is an enabler, not a magic solution. The real value comes from strategic implementation and people-first adoption.

What's been your experience with digital transformation in your organization? I'd love to hear your thoughts!

#TechTrends #Innovation #DigitalTransformation";
