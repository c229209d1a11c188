use super::pipeline::Prediction;
use crate::error::Result;

pub trait SentimentAnalysisModel {
    type Options: std::fmt::Debug + Clone;

    fn new(options: Self::Options) -> Result<Self>
    where
        Self: Sized;

    fn predict(&self, text: &str) -> Prediction;

    fn predict_batch(&self, texts: &[&str]) -> Vec<Prediction> {
        texts.iter().map(|text| self.predict(text)).collect()
    }
}
