use std::convert::Infallible;

use super::intervalpartition::IntervalPartition;

/// 一維數值積分演算法（Simpson、梯形…）的共同介面。
///
/// 實作必須是無狀態的：同一個 engine 可重複用於不同函數與區間。
/// `partition` 已在建構時驗證過，engine 不再重複檢查。
///
/// 被積函數只在單次呼叫期間借用，每個取樣點恰好求值一次、不做快取。
/// 求值順序為兩端點 x_0、x_n，再依索引遞增求內點 x_1 … x_{n-1}；
/// 函數回傳的 `NaN`/`Infinity` 原樣進入結果。
pub trait QuadratureEngine: Send + Sync {
    fn name(&self) -> &'static str;

    /// 以可能失敗的函數積分。
    ///
    /// 第一個 `Err` 立即原樣回傳，之後的取樣點不再求值，也不回傳部分結果。
    fn try_integrate<F, E>(
        &self,
        f: F,
        partition: &IntervalPartition,
    ) -> Result<f64, E>
    where
        F: FnMut(f64) -> Result<f64, E>;

    fn integrate<F>(&self, mut f: F, partition: &IntervalPartition) -> f64
    where
        F: FnMut(f64) -> f64,
    {
        match self.try_integrate(|x| Ok::<f64, Infallible>(f(x)), partition) {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }
}
