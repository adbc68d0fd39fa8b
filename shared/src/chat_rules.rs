//! Keyword rules for the scripted chat assistant
//!
//! Input is lower-cased and tested against each keyword group in order; the
//! first group with a substring match decides the canned answer. The reply
//! language follows the active UI language, not the language of the input.

use serde::{Deserialize, Serialize};

use crate::types::Language;

/// Canned answer selected for a message
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ResponseTopic {
    Yield,
    Wheat,
    Fertilizer,
    PestControl,
    Weather,
    Soil,
    Irrigation,
    Market,
    Organic,
    Greeting,
    Thanks,
    General,
}

/// Keyword groups in priority order
pub const KEYWORD_RULES: &[(ResponseTopic, &[&str])] = &[
    (ResponseTopic::Yield, &["yield", "production", "पैदावार", "उत्पादन"]),
    (ResponseTopic::Wheat, &["wheat", "गेहूं"]),
    (ResponseTopic::Fertilizer, &["fertilizer", "खाद", "उर्वरक"]),
    (ResponseTopic::PestControl, &["pest", "कीट", "control", "नियंत्रण"]),
    (ResponseTopic::Weather, &["weather", "मौसम", "rain", "बारिश"]),
    (ResponseTopic::Soil, &["soil", "मिट्टी"]),
    (ResponseTopic::Irrigation, &["irrigation", "सिंचाई", "water", "पानी"]),
    (ResponseTopic::Market, &["market", "price", "बाजार", "मूल्य", "कीमत"]),
    (ResponseTopic::Organic, &["organic", "जैविक"]),
    (ResponseTopic::Greeting, &["hello", "hi", "नमस्ते", "हैलो"]),
    (ResponseTopic::Thanks, &["thank", "धन्यवाद", "शुक्रिया"]),
];

/// Pick the canned answer for a message
pub fn classify(text: &str) -> ResponseTopic {
    let text = text.to_lowercase();
    KEYWORD_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| text.contains(k)))
        .map(|(topic, _)| *topic)
        .unwrap_or(ResponseTopic::General)
}

/// Full bot reply for a message in the given language
pub fn respond(text: &str, language: Language) -> &'static str {
    classify(text).response(language)
}

impl ResponseTopic {
    pub fn response(&self, language: Language) -> &'static str {
        match language {
            Language::English => self.response_en(),
            Language::Hindi => self.response_hi(),
        }
    }

    fn response_en(&self) -> &'static str {
        match self {
            ResponseTopic::Yield => "To improve crop yield, consider: 1) Proper soil testing and nutrient management, 2) Optimal planting density, 3) Timely irrigation, 4) Integrated pest management, and 5) Using quality seeds. What specific crop are you growing?",
            ResponseTopic::Wheat => "For wheat cultivation: Plant in November-December for best results. Use 100-120 kg seeds per hectare. Apply balanced fertilizers (NPK) and ensure proper irrigation during flowering stage. Harvest when grain moisture is 18-20%.",
            ResponseTopic::Fertilizer => "For organic fertilizers, consider: 1) Compost from farm waste, 2) Vermicompost, 3) Green manure crops like dhaincha, 4) Biofertilizers like Rhizobium. Apply 5-10 tons per hectare depending on soil condition.",
            ResponseTopic::PestControl => "For effective pest control: 1) Use IPM (Integrated Pest Management), 2) Install pheromone traps, 3) Encourage natural predators, 4) Use neem-based pesticides, 5) Crop rotation. Monitor fields regularly for early detection.",
            ResponseTopic::Weather => "Weather is crucial for farming success. Check forecasts regularly, plan irrigation accordingly, protect crops during extreme weather, and consider weather-based insurance. Would you like specific advice for current weather conditions?",
            ResponseTopic::Soil => "For soil health: 1) Regular soil testing, 2) Increase organic matter, 3) Practice crop rotation, 4) Prevent soil erosion, 5) Ensure proper drainage. What type of soil do you have?",
            ResponseTopic::Irrigation => "For efficient irrigation: 1) Use drip irrigation, 2) Monitor soil moisture, 3) Irrigate in morning or evening, 4) Apply mulching, 5) Harvest rainwater. Which irrigation method are you currently using?",
            ResponseTopic::Market => "For market information: 1) Check local mandi rates, 2) Use online platforms, 3) Connect with farmer producer organizations, 4) Maintain crop quality, 5) Proper storage. Which crop are you looking to sell?",
            ResponseTopic::Organic => "For organic farming: 1) Avoid chemical fertilizers and pesticides, 2) Use compost and vermicompost, 3) Adopt biological pest control, 4) Practice crop rotation and mixed farming, 5) Get certification. Are you looking to start organic farming?",
            ResponseTopic::Greeting => "Hello! I am your agricultural assistant. I can help you with farming, crops, weather, and agricultural techniques. What would you like assistance with today?",
            ResponseTopic::Thanks => "You are welcome! I am happy to help you. If you have any more questions, feel free to ask. Wishing you successful farming!",
            ResponseTopic::General => "I understand your question about farming. As your agricultural assistant, I can help with crop management, weather guidance, pest control, fertilizer recommendations, and more. Could you provide more specific details about your farming needs?",
        }
    }

    fn response_hi(&self) -> &'static str {
        match self {
            ResponseTopic::Yield => "फसल की पैदावार बढ़ाने के लिए: 1) मिट्टी की जांच और पोषक तत्व प्रबंधन, 2) उचित बीज दर, 3) समय पर सिंचाई, 4) एकीकृत कीट प्रबंधन, और 5) गुणवत्तापूर्ण बीजों का उपयोग करें। आप कौन सी फसल उगा रहे हैं?",
            ResponseTopic::Wheat => "गेहूं की खेती के लिए: नवंबर-दिसंबर में बुआई करें। प्रति हेक्टेयर 100-120 किलो बीज का उपयोग करें। संतुलित उर्वरक (NPK) डालें और फूल आने के समय उचित सिंचाई सुनिश्चित करें। जब दाने में 18-20% नमी हो तो कटाई करें।",
            ResponseTopic::Fertilizer => "जैविक खाद के लिए विचार करें: 1) खेत के कचरे से कंपोस्ट, 2) वर्मी कंपोस्ट, 3) ढैंचा जैसी हरी खाद की फसलें, 4) राइजोबियम जैसे जैव उर्वरक। मिट्टी की स्थिति के अनुसार प्रति हेक्टेयर 5-10 टन डालें।",
            ResponseTopic::PestControl => "प्रभावी कीट नियंत्रण के लिए: 1) IPM (एकीकृत कीट प्रबंधन) का उपयोग करें, 2) फेरोमोन ट्रैप लगाएं, 3) प्राकृतिक शिकारियों को बढ़ावा दें, 4) नीम आधारित कीटनाशकों का उपयोग करें, 5) फसल चक्र अपनाएं। जल्दी पहचान के लिए नियमित रूप से खेत की निगरानी करें।",
            ResponseTopic::Weather => "मौसम खेती की सफलता के लिए महत्वपूर्ण है। नियमित रूप से मौसम पूर्वानुमान देखें, सिंचाई की योजना बनाएं, चरम मौसम के दौरान फसलों की सुरक्षा करें, और मौसम आधारित बीमा पर विचार करें। क्या आप वर्तमान मौसम स्थितियों के लिए विशिष्ट सलाह चाहते हैं?",
            ResponseTopic::Soil => "मिट्टी की सेहत के लिए: 1) नियमित मिट्टी परीक्षण कराएं, 2) जैविक पदार्थ बढ़ाएं, 3) फसल चक्र अपनाएं, 4) मिट्टी की कटाव रोकें, 5) उचित जल निकासी सुनिश्चित करें। आपकी मिट्टी का प्रकार क्या है?",
            ResponseTopic::Irrigation => "कुशल सिंचाई के लिए: 1) ड्रिप सिंचाई का उपयोग करें, 2) मिट्टी की नमी की निगरानी करें, 3) सुबह या शाम को सिंचाई करें, 4) मल्चिंग करें, 5) वर्षा जल संचयन करें। आप कौन सी सिंचाई पद्धति का उपयोग कर रहे हैं?",
            ResponseTopic::Market => "बाजार की जानकारी के लिए: 1) स्थानीय मंडी की दरें देखें, 2) ऑनलाइन प्लेटफॉर्म का उपयोग करें, 3) किसान उत्पादक संगठनों से जुड़ें, 4) फसल की गुणवत्ता बनाए रखें, 5) उचित भंडारण करें। आप कौन सी फसल बेचना चाहते हैं?",
            ResponseTopic::Organic => "जैविक खेती के लिए: 1) रासायनिक उर्वरकों और कीटनाशकों से बचें, 2) कंपोस्ट और वर्मी कंपोस्ट का उपयोग करें, 3) जैविक कीट नियंत्रण अपनाएं, 4) फसल चक्र और मिश्रित खेती करें, 5) प्रमाणीकरण प्राप्त करें। क्या आप जैविक खेती शुरू करना चाहते हैं?",
            ResponseTopic::Greeting => "नमस्ते! मैं आपका कृषि सहायक हूँ। मैं खेती, फसल, मौसम, और कृषि तकनीकों के बारे में आपकी मदद कर सकता हूँ। आज आपको किस विषय में सहायता चाहिए?",
            ResponseTopic::Thanks => "आपका स्वागत है! मुझे आपकी मदद करके खुशी हुई। यदि आपके कोई और प्रश्न हैं तो बेझिझक पूछें। सफल खेती की शुभकामनाएं!",
            ResponseTopic::General => "मैं आपके कृषि संबंधी प्रश्न को समझ गया हूँ। कृषि सहायक के रूप में, मैं फसल प्रबंधन, मौसम मार्गदर्शन, कीट नियंत्रण, उर्वरक सुझाव, और अन्य कृषि विषयों में आपकी सहायता कर सकता हूँ। क्या आप अपनी कृषि आवश्यकताओं के बारे में अधिक विस्तार से बता सकते हैं?",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_each_group() {
        assert_eq!(classify("How to improve crop yield?"), ResponseTopic::Yield);
        assert_eq!(classify("Best time to plant WHEAT"), ResponseTopic::Wheat);
        assert_eq!(classify("Organic fertilizer tips"), ResponseTopic::Fertilizer);
        assert_eq!(classify("Pest control methods"), ResponseTopic::PestControl);
        assert_eq!(classify("will it rain"), ResponseTopic::Weather);
        assert_eq!(classify("soil"), ResponseTopic::Soil);
        assert_eq!(classify("drip irrigation"), ResponseTopic::Irrigation);
        assert_eq!(classify("mandi price"), ResponseTopic::Market);
        assert_eq!(classify("organic"), ResponseTopic::Organic);
        assert_eq!(classify("Hello"), ResponseTopic::Greeting);
        assert_eq!(classify("thanks a lot"), ResponseTopic::Thanks);
        assert_eq!(classify("tractor"), ResponseTopic::General);
    }

    #[test]
    fn test_first_match_wins() {
        // "wheat" group precedes "fertilizer"
        assert_eq!(classify("fertilizer for wheat"), ResponseTopic::Wheat);
        // "organic fertilizer" hits fertilizer before organic
        assert_eq!(classify("organic fertilizer"), ResponseTopic::Fertilizer);
        // "water" inside an irrigation question, "rain" in "rainwater" goes to weather first
        assert_eq!(classify("rainwater harvesting"), ResponseTopic::Weather);
        // "hi" is a plain substring, so "this" greets
        assert_eq!(classify("what is this"), ResponseTopic::Greeting);
        // "thank" loses to "hi" in "thanks, hi"
        assert_eq!(classify("thanks, hi"), ResponseTopic::Greeting);
    }

    #[test]
    fn test_hindi_keywords() {
        assert_eq!(classify("गेहूं कब बोएं"), ResponseTopic::Wheat);
        assert_eq!(classify("धन्यवाद"), ResponseTopic::Thanks);
        assert_eq!(classify("कीट"), ResponseTopic::PestControl);
    }

    #[test]
    fn test_reply_language_follows_ui_language() {
        let hindi = respond("hello", Language::Hindi);
        assert!(hindi.starts_with("नमस्ते!"));
        let english = respond("नमस्ते", Language::English);
        assert!(english.starts_with("Hello! I am your agricultural assistant."));
    }
}
