use crate::plan::TrainingProfile;

pub const SYSTEM_INSTRUCTION: &str =
    "You are a fitness coach that designs workout plans. You respond ONLY with valid JSON.";

const PLAN_SCHEMA: &str = r#"{
  "weekCount": number,
  "daysPerWeek": number,
  "summary": {
    "title": string,
    "description": string,
    "notes": string
  },
  "weeks": [
    {
      "weekNumber": number,
      "focus": string,
      "days": [
        {
          "id": string,
          "dayName": string,
          "title": string,
          "focus": string,
          "durationMinutes": number,
          "exerciseCount": number,
          "style": string,
          "experience": string,
          "exercises": [
            {
              "name": string,
              "sets": number,
              "reps": string,
              "equipment": string,
              "notes": string
            }
          ]
        }
      ]
    }
  ]
}"#;

/// Render the user prompt. Profile values are inserted as-is.
pub fn render(profile: &TrainingProfile) -> String {
    let TrainingProfile {
        goal,
        experience,
        style,
        days_per_week,
    } = profile;

    format!(
        "Create a structured workout plan for this person:\n\
         - Goal: {goal}\n\
         - Experience level: {experience}\n\
         - Preferred training style: {style}\n\
         - Training days per week: {days_per_week}\n\
         \n\
         Rules:\n\
         - Build a multi-week program. Use 6 weeks by default and never more than 8 weeks.\n\
         - Each week must have exactly {days_per_week} training days.\n\
         - Scale volume and intensity to the {experience} experience level.\n\
         - Keep the exercise selection true to the {style} style.\n\
         - Include rest or active recovery days between hard sessions.\n\
         - Avoid unsafe volume: no excessive sets, reps or session length for this level.\n\
         \n\
         Return ONLY a JSON object that matches this schema exactly, \
         with no markdown, code fences or text before or after it:\n\
         {PLAN_SCHEMA}\n"
    )
}
